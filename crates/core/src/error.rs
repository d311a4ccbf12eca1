use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{}` exited with non-success status: {}", .command, .output.trim_end())]
    CommandFailure { command: String, output: String },

    #[error("Error starting sub process `{}`: {}", .command, .original)]
    CommandSpawn {
        command: String,
        original: std::io::Error,
    },

    #[error("IO error with {} at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("`{}` was not found in PATH: {}", .executable, .original)]
    NotFound {
        executable: String,
        original: which::Error,
    },

    #[error("Could not determine the home directory to expand `{}`", .0)]
    HomeNotFound(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("The install command may not be empty.")]
    EmptyInstallCommand,

    #[error("Reading terminal input failed: {}", .0)]
    TerminalInput(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn command_failure(command: String, output: String) -> Self {
        Self::CommandFailure { command, output }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn not_found(executable: String, original: which::Error) -> Self {
        Self::NotFound {
            executable,
            original,
        }
    }
}
