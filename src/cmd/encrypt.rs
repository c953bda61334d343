use cipherforge::error::CfResult;
use cipherforge::mapping::Mapping;
use cipherforge::optimizer::mutation::generate_random;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plaintext to encrypt
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Decryption key (cipher letter i maps to the i-th letter); random if omitted
    #[arg(short, long)]
    pub key: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: EncryptArgs) -> CfResult<()> {
    let plaintext =
        super::read_text(args.text.as_deref(), args.input.as_deref(), "Enter the plaintext")?;

    let mapping: Mapping = match &args.key {
        Some(key) => key.parse()?,
        None => {
            let mut rng = if let Some(s) = args.seed {
                fastrand::Rng::with_seed(s)
            } else {
                fastrand::Rng::new()
            };
            let key = generate_random(&mut rng);
            info!("🔑 Generated random key");
            key
        }
    };

    println!("Key: {}", mapping);
    println!("{}", mapping.encrypt(&plaintext));
    Ok(())
}
