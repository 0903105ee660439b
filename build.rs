use std::{env, process::exit};

/// A cryptographic backend and every feature that selects it.
struct CryptoBackend {
    name: &'static str,
    features: &'static [&'static str],
}

const ALL_BACKENDS: &[CryptoBackend] = &[
    CryptoBackend {
        name: "RustCrypto",
        features: &["crypto-rustcrypto"],
    },
    CryptoBackend {
        name: "OpenSSL",
        features: &["crypto-openssl", "crypto-aws-lc"],
    },
];

fn main() {
    let enabled = ALL_BACKENDS
        .iter()
        .filter(|backend| backend.features.iter().copied().any(feature_enabled))
        .map(|backend| backend.name)
        .collect::<Vec<_>>();

    match enabled.as_slice() {
        [_] => {}
        [] => fail(
            "No cryptographic backend selected.

`jwk-pubkey` needs exactly one backend, chosen with the `crypto-rustcrypto`, \
             `crypto-openssl`, `crypto-openssl-vendored` or `crypto-aws-lc` feature.",
        ),
        many => fail(&format!(
            "Multiple cryptographic backends selected: {}.

`jwk-pubkey` needs exactly one backend. Disable the default features \
             (`default-features = false`) when selecting a backend other than RustCrypto.",
            many.join(", ")
        )),
    }
}

fn feature_enabled(feature: &str) -> bool {
    let var = format!("CARGO_FEATURE_{}", feature.to_uppercase().replace('-', "_"));
    env::var_os(var).is_some()
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    exit(1);
}
