//! Common test helpers.

#![allow(dead_code)]

use serde_json::Value;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// A 2048 bit modulus that is syntactically valid, but not a product of two
/// primes.
pub const FAKE_MODULUS: &str = "sXch9W6_K8oZn3PfJPZepKvXYTwc_nPIu9JrYfPRzM8zqVnD3edGldHTebAiN4MbcDkN5q1nbRV69BQ1_lwPt6b92_l6dcH0QJebQqovExY16Y7bQO02NGqjc8tkFPAeqC1cgI2VmojzG3FeAWqxtj5Ez5g0PYYJgxIoEXRopv9N2V-DME4mXwMxf3NVZ9d73Sm1Tb9p_U1OwQuWCh0p4kJHDsh44yBdM37KMLWSLM6pEr7jeWyzX0d1sKdfbORaVq0f1uzjZ_3iM_Oey7GMJKkPGYQlQjWbL2iyHv5PeAxJmZLykB0CZ0oUzOGlYfKJhL1x_j1D_zFckvj7o0K9GQ";

/// Reads a key file from the `tests/vectors/jwk` directory.
pub fn read_jwk(name: &str) -> TestResult<Value> {
    let json = std::fs::read_to_string(format!(
        "{}/tests/vectors/jwk/{name}.json",
        env!("CARGO_MANIFEST_DIR"),
    ))?;
    let key: Value = serde_json::from_str(&json)?;

    Ok(key)
}

/// A message and its base64 encoded signatures, keyed by hash name.
pub struct Signatures {
    pub message: String,
    pub signatures: Vec<(String, String)>,
}

/// Reads the signatures made by the private half of `<name>.pub.json`.
pub fn read_signatures(name: &str) -> TestResult<Signatures> {
    let json = read_jwk(&format!("{name}.sig"))?;

    let message = json["message"]
        .as_str()
        .ok_or("`message` must be a string")?
        .to_owned();
    let signatures = json["signatures"]
        .as_object()
        .ok_or("`signatures` must be an object")?
        .iter()
        .map(|(hash, sig)| (hash.clone(), sig.as_str().unwrap_or_default().to_owned()))
        .collect();

    Ok(Signatures {
        message,
        signatures,
    })
}
