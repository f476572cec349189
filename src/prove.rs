use core::convert::Infallible;

/// The outcome of a property applied to one generated item.
///
/// A check calls the property once per draw and treats an `Err` proof as a
/// counterexample. `()` always holds, `bool` holds when `true` and a
/// [`Result`] holds when it is [`Ok`], with its error carried into the
/// failure report.
pub trait Prove {
    type Proof;
    type Error;
    fn prove(self) -> Result<Self::Proof, Self::Error>;
}

/// Properties that only assert or panic.
impl Prove for () {
    type Proof = ();
    type Error = Infallible;

    fn prove(self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl Prove for bool {
    type Proof = ();
    type Error = ();

    fn prove(self) -> Result<(), ()> {
        match self {
            true => Ok(()),
            false => Err(()),
        }
    }
}

/// Properties that explain their failures.
impl<T, E> Prove for Result<T, E> {
    type Proof = T;
    type Error = E;

    fn prove(self) -> Result<T, E> {
        self
    }
}
