use crate::codec::{Coinstring, Decoded};
use crate::config::{parse_version, Config};
use crate::error::{CoinstringError, Result};
use crate::utils::{parse_hex, to_hex};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "coinstring", about = "Versioned, checksummed Base58 strings")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "encode", about = "Encode a hex payload under a version byte")]
    Encode {
        #[arg(help = "Payload bytes as hex (e.g. a hash160 or private key)")]
        payload: String,
        #[arg(
            short = 'v',
            long = "version",
            value_parser = parse_version,
            help = "Version byte, decimal or 0x-prefixed hex"
        )]
        version: Option<u8>,
    },
    #[command(name = "decode", about = "Decode a string and print its payload")]
    Decode {
        #[arg(help = "Encoded address or WIF string")]
        text: String,
        #[arg(
            short = 'v',
            long = "version",
            value_parser = parse_version,
            help = "Expected version byte; inferred from the string when omitted"
        )]
        version: Option<u8>,
        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },
    #[command(name = "validate", about = "Check a string against a version byte")]
    Validate {
        #[arg(help = "Encoded address or WIF string")]
        text: String,
        #[arg(
            short = 'v',
            long = "version",
            value_parser = parse_version,
            help = "Expected version byte, decimal or 0x-prefixed hex"
        )]
        version: Option<u8>,
    },
}

/// Text to print and whether the command succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct DecodeReport {
    version: u8,
    bytes: String,
    compression_flag: bool,
}

impl From<&Decoded> for DecodeReport {
    fn from(decoded: &Decoded) -> Self {
        DecodeReport {
            version: decoded.version(),
            bytes: to_hex(decoded.bytes()),
            compression_flag: decoded.has_compression_flag(),
        }
    }
}

pub fn execute(command: Command, config: &Config) -> Result<CommandOutput> {
    let codec = Coinstring::new();
    match command {
        Command::Encode { payload, version } => {
            let version = require_version(version, config)?;
            let bytes = parse_hex(&payload)?;
            Ok(CommandOutput::success(codec.encode(version, bytes)))
        }
        Command::Decode {
            text,
            version,
            json,
        } => {
            let version = match version {
                Some(version) => Some(version),
                None => config.get_default_version()?,
            };
            let decoded = match version {
                Some(version) => codec.decode(version, &text)?,
                None => codec.decode_any(&text)?,
            };
            let report = DecodeReport::from(&decoded);
            let rendered = if json {
                serde_json::to_string_pretty(&report).map_err(|e| {
                    CoinstringError::Serialization(format!("Failed to render JSON: {e}"))
                })?
            } else {
                format!(
                    "version: {:#04x}\nbytes: {}\ncompression flag: {}",
                    report.version, report.bytes, report.compression_flag
                )
            };
            Ok(CommandOutput::success(rendered))
        }
        Command::Validate { text, version } => {
            let version = require_version(version, config)?;
            if let Err(e) = codec.decode(version, &text) {
                log::info!("{text} is not a valid coinstring for version {version:#04x}: {e}");
                return Ok(CommandOutput {
                    text: String::from("invalid"),
                    success: false,
                });
            }
            Ok(CommandOutput::success(String::from("valid")))
        }
    }
}

fn require_version(version: Option<u8>, config: &Config) -> Result<u8> {
    match version {
        Some(version) => Ok(version),
        None => config.get_default_version()?.ok_or_else(|| {
            CoinstringError::Config(
                "No version byte given; pass --version or set COINSTRING_DEFAULT_VERSION"
                    .to_string(),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::DEFAULT_VERSION_KEY;

    const ADDRESS: &str = "16UjcYNBG9GTK4uq2f7yYEbuifqCzoLMGS";
    const WIF_COMPRESSED: &str = "KwomKti1X3tYJUUMb1TGSM2mrZk1wb1aHisUNHCQXTZq5auC2qc3";

    fn empty_config() -> Config {
        Config::from_lookup(|_| None)
    }

    fn parse(args: &[&str]) -> Command {
        Opt::try_parse_from(std::iter::once("coinstring").chain(args.iter().copied()))
            .expect("arguments should parse")
            .command
    }

    #[test]
    fn test_encode_command() {
        let command = parse(&[
            "encode",
            "3c176e659bea0f29a3e9bf7880c112b1b31b4dc8",
            "--version",
            "0x00",
        ]);
        let output = execute(command, &empty_config()).unwrap();
        assert_eq!(output, CommandOutput::success(ADDRESS.to_string()));
    }

    #[test]
    fn test_encode_requires_version() {
        let command = parse(&["encode", "00"]);
        assert!(matches!(
            execute(command, &empty_config()),
            Err(CoinstringError::Config(_))
        ));

        let config = Config::from_lookup(|key| {
            (key == DEFAULT_VERSION_KEY).then(|| "0".to_string())
        });
        let command = parse(&["encode", "3c176e659bea0f29a3e9bf7880c112b1b31b4dc8"]);
        assert_eq!(execute(command, &config).unwrap().text, ADDRESS);
    }

    #[test]
    fn test_decode_command_infers_version() {
        let output = execute(parse(&["decode", WIF_COMPRESSED]), &empty_config()).unwrap();
        assert_eq!(
            output.text,
            "version: 0x80\n\
             bytes: 1184cd2cdd640ca42cfc3a091c51d549b2f016d454b2774019c2b2d2e08529fd01\n\
             compression flag: true"
        );
    }

    #[test]
    fn test_decode_command_json() {
        let output = execute(
            parse(&["decode", ADDRESS, "-v", "0", "--json"]),
            &empty_config(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["bytes"], "3c176e659bea0f29a3e9bf7880c112b1b31b4dc8");
        assert_eq!(value["compression_flag"], false);
    }

    #[test]
    fn test_decode_command_reports_version_mismatch() {
        let result = execute(parse(&["decode", ADDRESS, "--version", "5"]), &empty_config());
        assert_eq!(
            result,
            Err(CoinstringError::VersionMismatch {
                expected: 5,
                actual: 0
            })
        );
    }

    #[test]
    fn test_validate_command() {
        let output = execute(parse(&["validate", ADDRESS, "-v", "0"]), &empty_config()).unwrap();
        assert!(output.success);
        assert_eq!(output.text, "valid");

        let lowered = ADDRESS.to_lowercase();
        let output = execute(
            parse(&["validate", lowered.as_str(), "-v", "0"]),
            &empty_config(),
        )
        .unwrap();
        assert!(!output.success);
        assert_eq!(output.text, "invalid");
    }

    #[test]
    fn test_rejects_bad_version_argument() {
        let result = Opt::try_parse_from(["coinstring", "validate", ADDRESS, "--version", "300"]);
        assert!(result.is_err());
    }
}
