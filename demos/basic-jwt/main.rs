//! Simple program to sign and verify a JsonWebToken (JWT)

use clap::Parser;
use clio::Input;
use compact_jws::{Claims, Decoder, Encoder, KeySet};
use eyre::eyre;
use rsa::{pkcs1::DecodeRsaPrivateKey, pkcs8::DecodePublicKey, RsaPrivateKey, RsaPublicKey};

#[derive(Parser)]
enum Commands {
    /// Signs a payload
    Sign {
        /// The algorithm to sign with
        #[arg(short, long, default_value = "HS256")]
        alg: String,
        /// Shared secret for the HMAC algorithms
        #[arg(short, long)]
        secret: Option<String>,
        /// PEM encoded PKCS#1 private key for the RSA algorithms
        #[arg(long)]
        private_key: Option<Input>,
        /// The claims that this JWT should contain
        payload: Input,
    },
    /// Verifies a JsonWebToken, using the algorithm it declares
    Verify {
        jwt: String,
        /// Shared secret for the HMAC algorithms
        #[arg(short, long)]
        secret: Option<String>,
        /// PEM encoded SPKI public key for the RSA algorithms
        #[arg(long)]
        public_key: Option<Input>,
        /// Refuse tokens that declare any other algorithm
        #[arg(short, long)]
        expect: Option<String>,
    },
}

fn main() -> eyre::Result<()> {
    let cmds = Commands::parse();

    match cmds {
        Commands::Sign {
            alg,
            secret,
            private_key,
            payload,
        } => {
            let mut keys = KeySet::new();
            if let Some(secret) = secret {
                keys = keys.with_hmac_secret(secret);
            }
            if let Some(pem) = private_key {
                let pem = std::io::read_to_string(pem)?;
                keys = keys.with_rsa_private_key(RsaPrivateKey::from_pkcs1_pem(&pem)?);
            }

            let claims: Claims = serde_json::from_reader(payload)?;
            let jwt = Encoder::for_algorithm(&alg, &keys)?.encode(&claims)?;
            println!("JWT: {jwt}");
        }
        Commands::Verify {
            jwt,
            secret,
            public_key,
            expect,
        } => {
            let mut keys = KeySet::new();
            if let Some(secret) = secret {
                keys = keys.with_hmac_secret(secret);
            }
            if let Some(pem) = public_key {
                let pem = std::io::read_to_string(pem)?;
                keys = keys.with_rsa_public_key(RsaPublicKey::from_public_key_pem(&pem)?);
            }

            let token = Decoder::new(keys).decode_token::<Claims>(&jwt)?;
            let alg = token.header().algorithm.as_str();
            if let Some(expected) = expect {
                if alg != expected {
                    return Err(eyre!("token declares {alg}, expected {expected}"));
                }
            }

            println!("Verified ({alg}):\n{}", serde_json::to_string_pretty(token.payload())?);
        }
    }

    Ok(())
}
