//! Serialization of HyperFloat.
//! A number is written as the string produced by its `Display` implementation.

use crate::num::HyperFloat;
use serde::{Serialize, Serializer};

impl Serialize for HyperFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::num::HyperFloat;
    use crate::common::consts::{INF_NEG, NAN};

    #[test]
    fn to_json() {
        assert_eq!(to_string(&HyperFloat::from_f64(0.3)).unwrap(), "\"0.3\"");
        assert_eq!(
            to_string(&HyperFloat::from_components(1.0, 1.0, 400.0)).unwrap(),
            "\"1e400\""
        );
        assert_eq!(
            to_string(&HyperFloat::from_components(-1.0, 7.0, 20.0)).unwrap(),
            "\"-(e^7)20\""
        );
        assert_eq!(to_string(&NAN).unwrap(), "\"NaN\"");
        assert_eq!(to_string(&INF_NEG).unwrap(), "\"-Infinity\"");
    }
}
