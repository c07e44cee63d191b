//! Platform-specific shell selection.

/// Shell program and flag used to run a one-line command string.
///
/// Status and launch commands are short, so they run through the plain
/// system shell rather than the user's login shell.
pub fn shell_invocation() -> (String, &'static str) {
    if cfg!(target_os = "windows") {
        let comspec = std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string());
        (comspec, "/C")
    } else {
        ("/bin/sh".to_string(), "-c")
    }
}

/// Check if running in a CI environment.
///
/// Used by `main()` to fall back to the non-interactive UI. Checks common
/// CI environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`,
/// `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    [
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
    ]
    .iter()
    .any(|var| std::env::var(var).is_ok())
}
