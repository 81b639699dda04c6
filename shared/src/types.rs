/// Workspace-wide result alias; callers attach detail with `anyhow::Context`.
pub type Result<T> = anyhow::Result<T>;
