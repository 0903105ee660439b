mod common;

use common::{read_jwk, TestResult};
use jwk_pubkey::jwk::{EncryptionKey, KeyOperation, KeyOperations, KeyType, VerificationKey};

fn ops(ops: &[KeyOperation]) -> KeyOperations {
    ops.iter().cloned().collect()
}

pub mod rsa {
    use super::*;

    #[test]
    fn public_key_roundtrip() -> TestResult {
        let json = read_jwk("rsa.pub")?;

        let key: EncryptionKey = serde_json::from_value(json.clone())?;
        let expected = EncryptionKey::builder(
            json["n"].as_str().ok_or("n")?,
            json["e"].as_str().ok_or("e")?,
        )
        .algorithm(String::from("RSA-OAEP-256"))
        .key_operations(ops(&[KeyOperation::Encrypt]))
        .extractable(true)
        .build();
        assert_eq!(key, expected);

        let json2 = serde_json::to_value(&key)?;
        assert_eq!(json, json2);

        Ok(())
    }

    #[test]
    fn private_members_are_ignored() -> TestResult {
        let key: EncryptionKey = serde_json::from_value(read_jwk("rsa")?)?;

        assert_eq!(key.key_type(), &KeyType::Rsa);
        assert_eq!(key.key_operations(), Some(&ops(&[KeyOperation::Decrypt])));
        assert!(!key.encryption_allowed());
        assert!(serde_json::to_value(&key)?.get("d").is_none());

        Ok(())
    }

    #[test]
    fn missing_members() -> TestResult {
        let key: EncryptionKey = serde_json::from_str(r#"{"kty":"RSA","n":"AQAB","e":"AQAB"}"#)?;
        assert_eq!(key.algorithm(), None);
        assert_eq!(key.key_operations(), None);
        assert_eq!(key.extractable(), None);
        assert!(!key.encryption_allowed());

        assert!(serde_json::from_str::<EncryptionKey>(r#"{"n":"AQAB","e":"AQAB"}"#).is_err());
        assert!(serde_json::from_str::<EncryptionKey>(r#"{"kty":"RSA","n":"AQAB"}"#).is_err());

        Ok(())
    }
}

pub mod ec {
    use super::*;

    #[test]
    fn public_key_roundtrip() -> TestResult {
        for name in ["p256.pub", "p384.pub", "p521.pub"] {
            let json = read_jwk(name)?;

            let key: VerificationKey = serde_json::from_value(json.clone())?;
            assert_eq!(key.key_type(), &KeyType::Ec);
            assert_eq!(key.curve(), json["crv"].as_str());
            assert_eq!(key.key_operations(), Some(&ops(&[KeyOperation::Verify])));
            assert_eq!(key.extractable(), Some(true));

            let json2 = serde_json::to_value(&key)?;
            assert_eq!(json, json2);
        }

        Ok(())
    }

    #[test]
    fn unknown_values_are_preserved() -> TestResult {
        let json = serde_json::json!({
            "kty": "OKP",
            "crv": "Ed25519",
            "key_ops": ["deriveBits"],
            "x": "AQAB",
            "y": "AQAB",
        });

        let key: VerificationKey = serde_json::from_value(json.clone())?;
        assert_eq!(key.key_type(), &KeyType::Other(String::from("OKP")));
        assert_eq!(key.curve(), Some("Ed25519"));
        assert_eq!(key.key_operations(), Some(&ops(&[KeyOperation::DeriveBits])));

        assert_eq!(serde_json::to_value(&key)?, json);

        Ok(())
    }
}
