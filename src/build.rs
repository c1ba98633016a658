//! Solidity build pipeline driven by the configured compiler settings

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tracing::{info, warn};

use crate::{config::CompilerConfig, errors::ScriptError};

/// Runs solc over the project sources with the configured settings
pub struct SolcBuilder<'a> {
    /// Compiler settings from the project configuration
    config: &'a CompilerConfig,
}

impl<'a> SolcBuilder<'a> {
    /// Build a solc driver for the given compiler settings
    pub fn new(config: &'a CompilerConfig) -> Self {
        Self { config }
    }

    /// Compile every Solidity source found in `sources_dir`, dropping the
    /// `.bin` and `.abi` artifacts into `out_dir`
    pub fn compile(&self, sources_dir: &Path, out_dir: &Path) -> Result<(), ScriptError> {
        let sources = collect_sources(sources_dir)?;
        if sources.is_empty() {
            return Err(ScriptError::ContractCompilation(format!(
                "no Solidity sources found in {}",
                sources_dir.display()
            )));
        }

        fs::create_dir_all(out_dir).map_err(|e| ScriptError::ContractCompilation(e.to_string()))?;

        self.check_compiler_version();

        let mut build_cmd = Command::new("solc");
        build_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        build_cmd.args(self.solc_args(&sources, out_dir));

        command_success_or(build_cmd, "Failed to compile Solidity sources")
    }

    /// Assemble the solc invocation from the compiler settings
    fn solc_args(&self, sources: &[PathBuf], out_dir: &Path) -> Vec<std::ffi::OsString> {
        let mut args: Vec<std::ffi::OsString> =
            vec!["--bin".into(), "--abi".into(), "--overwrite".into()];
        if self.config.optimizer.enabled {
            args.push("--optimize".into());
            args.push("--optimize-runs".into());
            args.push(self.config.optimizer.runs.to_string().into());
        }
        args.push("--evm-version".into());
        args.push(self.config.evm_version.into());
        args.push("-o".into());
        args.push(out_dir.into());
        for source in sources {
            args.push(source.into());
        }
        args
    }

    /// Warn when the installed solc does not match the pinned version
    fn check_compiler_version(&self) {
        let output = Command::new("solc").arg("--version").output();
        match output {
            Ok(output) => {
                let reported = String::from_utf8_lossy(&output.stdout).into_owned();
                if !reported.contains(self.config.version) {
                    warn!(
                        "Sources are pinned to solc {} but the installed compiler reports: {}",
                        self.config.version,
                        reported.trim()
                    );
                }
            }
            Err(e) => warn!("Could not query the solc version: {}", e),
        }
    }
}

/// List the `.sol` files directly under the given directory
fn collect_sources(sources_dir: &Path) -> Result<Vec<PathBuf>, ScriptError> {
    let mut sources: Vec<PathBuf> = fs::read_dir(sources_dir)
        .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "sol")
                .then_some(path)
        })
        .collect();
    sources.sort();
    Ok(sources)
}

/// Executes a command, returning an error if the command fails
fn command_success_or(mut cmd: Command, err_msg: &str) -> Result<(), ScriptError> {
    info!("Running command: {:?}", cmd);
    if !cmd
        .output()
        .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?
        .status
        .success()
    {
        Err(ScriptError::ContractCompilation(String::from(err_msg)))
    } else {
        Ok(())
    }
}
