use std::{
    env,
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Interpreter used by the statistics and plotting stages
pub const R_INTERPRETER: &str = "Rscript";

/// Overrides the interpreter name or path
pub const R_INTERPRETER_ENV: &str = "DAMAGE_CONFIG_RSCRIPT";

/// Libraries the statistics stage loads
pub const R_LIBRARIES: [&str; 5] = ["inline", "ggplot2", "gam", "Rcpp", "RcppGSL"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStatus {
    name: String,
    loaded: bool,
    diagnostic: Option<String>,
}

impl LibraryStatus {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Last line of the interpreter's error output when loading failed
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}

/// What the runtime environment can do for the statistics and plotting stages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capability {
    interpreter: Option<PathBuf>,
    libraries: Vec<LibraryStatus>,
}

impl Capability {
    /// Interpreter found with every library loadable
    #[cfg(test)]
    pub fn available<P: Into<PathBuf>>(interpreter: P) -> Self {
        Self {
            interpreter: Some(interpreter.into()),
            libraries: R_LIBRARIES
                .iter()
                .map(|s| LibraryStatus {
                    name: s.to_string(),
                    loaded: true,
                    diagnostic: None,
                })
                .collect(),
        }
    }

    /// No interpreter on the path
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Interpreter found but the named libraries failed to load
    #[cfg(test)]
    pub fn with_missing<P: Into<PathBuf>>(interpreter: P, missing: &[&str]) -> Self {
        let mut cap = Self::available(interpreter);
        for lib in cap.libraries.iter_mut() {
            if missing.contains(&lib.name.as_str()) {
                lib.loaded = false;
            }
        }
        cap
    }

    pub fn interpreter(&self) -> Option<&Path> {
        self.interpreter.as_deref()
    }

    pub fn has_interpreter(&self) -> bool {
        self.interpreter.is_some()
    }

    pub fn libraries(&self) -> &[LibraryStatus] {
        &self.libraries
    }

    pub fn missing_libraries(&self) -> impl Iterator<Item = &LibraryStatus> {
        self.libraries.iter().filter(|l| !l.loaded)
    }

    /// Statistical estimation can run
    pub fn statistics(&self) -> bool {
        self.has_interpreter() && self.libraries.iter().all(|l| l.loaded)
    }
}

/// Looks for the interpreter and tries its libraries
#[derive(Debug, Clone)]
pub struct Prober {
    interpreter: OsString,
    search_path: Option<OsString>,
    libraries: Vec<String>,
}

impl Prober {
    pub fn new<S: Into<OsString>>(interpreter: S) -> Self {
        Self {
            interpreter: interpreter.into(),
            search_path: None,
            libraries: R_LIBRARIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Interpreter from `DAMAGE_CONFIG_RSCRIPT` (default `Rscript`), searched in `PATH`
    pub fn from_env() -> Self {
        let interpreter = env::var_os(R_INTERPRETER_ENV)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| OsString::from(R_INTERPRETER));
        let prober = Self::new(interpreter);
        match env::var_os("PATH") {
            Some(path) => prober.search_path(path),
            None => prober,
        }
    }

    pub fn search_path<S: Into<OsString>>(mut self, path: S) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn probe(&self) -> Capability {
        let Some(interpreter) = find_executable(&self.interpreter, self.search_path.as_deref())
        else {
            debug!(
                "{} not found in PATH",
                Path::new(&self.interpreter).display()
            );
            return Capability::unavailable();
        };
        debug!("Using interpreter {}", interpreter.display());

        let libraries = self
            .libraries
            .iter()
            .map(|lib| check_library(&interpreter, lib))
            .collect();

        Capability {
            interpreter: Some(interpreter),
            libraries,
        }
    }
}

/// Probe the environment with default settings
pub fn probe() -> Capability {
    Prober::from_env().probe()
}

fn check_library(interpreter: &Path, lib: &str) -> LibraryStatus {
    let res = Command::new(interpreter)
        .arg("-e")
        .arg(format!("library({lib})"))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output();

    let (loaded, diagnostic) = match res {
        Ok(out) if out.status.success() => (true, None),
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            let last = stderr
                .lines()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .last()
                .map(String::from);
            (false, last.or_else(|| Some(out.status.to_string())))
        }
        Err(e) => (false, Some(e.to_string())),
    };
    trace!("Library {}: loaded = {}", lib, loaded);
    LibraryStatus {
        name: lib.to_string(),
        loaded,
        diagnostic,
    }
}

/// Locate `name` the way a shell would: names with a path separator are taken
/// as they are, anything else is looked up in each `PATH` entry in turn
pub fn find_executable(name: &OsStr, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let p = Path::new(name);
    if p.components().count() > 1 {
        return is_executable(p).then(|| p.to_path_buf());
    }
    env::split_paths(search_path?)
        .map(|dir| {
            if dir.as_os_str().is_empty() {
                PathBuf::from(".").join(name)
            } else {
                dir.join(name)
            }
        })
        .find(|c| is_executable(c))
}

#[cfg(unix)]
fn is_executable(p: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    p.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(p: &Path) -> bool {
    p.is_file()
}

/// Log and print the outcome of a probe; returns true if everything is present
pub fn report(cap: &Capability) -> bool {
    let Some(interpreter) = cap.interpreter() else {
        error!("Cannot check for R packages without {}", R_INTERPRETER);
        return false;
    };
    info!("Checking R packages with {}", interpreter.display());
    for lib in cap.libraries() {
        println!(
            "{}\t{}",
            lib.name(),
            if lib.loaded() { "ok" } else { "missing" }
        );
        if !lib.loaded() {
            error!("Could not load the library '{}' in R", lib.name());
            if let Some(d) = lib.diagnostic() {
                debug!("{}: {}", lib.name(), d);
            }
        }
    }
    if cap.statistics() {
        info!("All R packages are present");
        true
    } else {
        false
    }
}
