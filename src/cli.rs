//! Minimal CLI: manifest → (typescript | sample check)
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate TypeScript declarations from type manifests, or check JSON
/// samples against a declared shape
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit a generated .ts declaration file
    Ts(TsOut),
    /// validate JSON sample files against a declared type
    Check(CheckSamples),
}

#[derive(Args, Debug, Clone)]
struct ManifestSettings {
    /// One or more manifest .json files. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    manifest: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct TsOut {
    #[command(flatten)]
    manifests: ManifestSettings,

    /// root type names, in output order (default: every declaration in manifest order)
    #[arg(long)]
    root: Vec<String>,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// omit the DO-NOT-EDIT header line
    #[arg(long, default_value_t = false)]
    no_header: bool,
}

#[derive(clap::Parser, Debug)]
struct CheckSamples {
    #[command(flatten)]
    manifests: ManifestSettings,

    /// declaration name the samples must conform to
    #[arg(long)]
    type_name: String,

    /// One or more JSON sample files. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl ManifestSettings {
    fn load(&self) -> anyhow::Result<crate::schema::Registry> {
        let paths = resolve_file_path_patterns(&self.manifest)
            .context("failed to resolve manifest file paths")?;
        crate::manifest::load_merged(&paths)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Ts(target) => {
                // 1) load declarations
                let reg = target.manifests.load()?;

                // 2) lower from the requested roots
                let decls = if target.root.is_empty() {
                    crate::lower::lower_all(&reg)?
                } else {
                    crate::lower::lower(&reg, &target.root)?
                };

                // 3) emit declaration text
                let mut cg = if target.no_header {
                    crate::emit::Codegen::new()
                } else {
                    crate::emit::Codegen::with_header()
                };
                cg.emit_all(&decls);
                let ts_src = cg.into_string();

                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent).with_context(|| {
                            format!("failed to create output directory for {}", out.display())
                        })?;
                    }
                    std::fs::write(out, &ts_src)
                        .with_context(|| format!("failed to write {}", out.display()))?;
                } else {
                    print!("{ts_src}");
                }
                Ok(())
            }
            Command::Check(target) => {
                let reg = target.manifests.load()?;
                if reg.get(&target.type_name).is_none() {
                    anyhow::bail!("unknown type `{}` (declared: {})",
                        target.type_name,
                        reg.names().collect::<Vec<_>>().join(", "));
                }

                let paths = resolve_file_path_patterns(&target.input)
                    .context("failed to resolve sample file paths")?;

                let mut failures = 0usize;
                for path in &paths {
                    let src = std::fs::read_to_string(path)
                        .with_context(|| format!("failed to read sample {}", path.display()))?;
                    let value: serde_json::Value = serde_json::from_str(&src)
                        .with_context(|| format!("failed to parse sample {}", path.display()))?;

                    let violations =
                        crate::validate::check_value(&reg, &target.type_name, &value);
                    if violations.is_empty() {
                        println!("{} {}", "ok".green(), path.display());
                    } else {
                        failures += 1;
                        println!("{} {}", "FAIL".red().bold(), path.display());
                        for v in &violations {
                            println!("  {v}");
                        }
                    }
                }

                if failures > 0 {
                    anyhow::bail!("{failures} of {} samples rejected", paths.len());
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
