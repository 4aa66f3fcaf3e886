//! Secret manifest creation.

use crate::cli::CreateArgs;
use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use gitsecret_core::util::expand_path;
use gitsecret_manifest::Options;
use gitsecret_types::config::Defaults;
use gitsecret_types::EcdsaCurve;
use tracing::debug;
use url::Url;

pub fn execute(args: &CreateArgs, defaults: &Defaults) -> Result<()> {
    let options = build_options(args, defaults)?;
    debug!(?options, "resolved options");

    let manifest = gitsecret_manifest::generate(&options)
        .with_context(|| format!("Failed to generate secret '{}'", options.name))?;

    if args.export {
        print!("{}", manifest.content);
        return Ok(());
    }

    let path = manifest
        .write_file(".")
        .with_context(|| format!("Failed to write {}", manifest.path.display()))?;
    eprintln!(
        "{} Secret manifest written to: {}",
        "✓".green().bold(),
        path.display().to_string().cyan()
    );

    Ok(())
}

/// Map flags and the Git URL onto generator options. Flags win over
/// configured defaults.
pub fn build_options(args: &CreateArgs, defaults: &Defaults) -> Result<Options> {
    let url = Url::parse(&args.url).with_context(|| format!("Invalid git URL '{}'", args.url))?;

    let mut options = Options::from_defaults(defaults);
    options.name = args.name.clone();
    if let Some(namespace) = &args.namespace {
        options.namespace = namespace.clone();
    }
    if let Some(target_path) = &args.target_path {
        options.target_path = target_path.clone();
    }
    if let Some(manifest_file) = &args.manifest_file {
        options.manifest_file = manifest_file.clone();
    }
    options.ca_file_path = args.ca_file.as_ref().map(expand_path);

    match url.scheme() {
        "ssh" => {
            let host = url
                .host_str()
                .ok_or_else(|| anyhow!("Git URL '{}' has no host", args.url))?;
            options.ssh_hostname = match url.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            };

            match &args.private_key_file {
                Some(path) => options.private_key_path = Some(expand_path(path)),
                None => {
                    options.private_key_algorithm = Some(
                        args.ssh_key_algorithm
                            .clone()
                            .unwrap_or_else(|| defaults.key_algorithm.to_string()),
                    );
                }
            }

            if let Some(bits) = args.ssh_rsa_bits {
                if bits < 1024 || bits % 8 != 0 {
                    bail!("RSA key size must be a multiple of 8 and at least 1024 bits, got {}", bits);
                }
                options.rsa_key_bits = bits;
            }
            if let Some(curve) = &args.ssh_ecdsa_curve {
                options.ecdsa_curve = curve.parse::<EcdsaCurve>()?;
            }
        }
        "http" | "https" => {
            match (&args.username, &args.password) {
                (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                    options.username = username.clone();
                    options.password = password.clone();
                }
                _ => bail!("For Git over HTTP/S the username and password are required"),
            }
        }
        other => bail!(
            "git URL scheme '{}' not supported, can be: ssh, http and https",
            other
        ),
    }

    Ok(options)
}
