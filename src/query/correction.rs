/// Strategy slot for spelling correction of the raw search string,
/// applied before planning. The default is an identity pass-through; a
/// real corrector can be plugged into the engine without touching the
/// query path.
pub trait TermCorrector: Send + Sync {
    fn correct(&self, term: &str) -> String;

    fn name(&self) -> &str;
}

pub struct NoCorrection;

impl TermCorrector for NoCorrection {
    fn correct(&self, term: &str) -> String {
        term.to_string()
    }

    fn name(&self) -> &str {
        "identity"
    }
}
