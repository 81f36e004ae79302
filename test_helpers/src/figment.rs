//! Policy loading inside a [`figment::Jail`].
//!
//! Policy sources are process-global (the working directory and the
//! environment), so loading tests populate a jail first and then run the
//! loader inside it. The loader's own result is handed back untouched, which
//! lets a test assert on a rejected policy as easily as on a valid one.

use anyhow::{Context, Result, anyhow};
use figment::Jail;

/// Populates a jail with `setup`, then runs `load` inside it.
///
/// The outer `Result` reports problems with the jail itself: a failed setup
/// step or a jail that could not be created. The inner `Result` is whatever
/// `load` returned.
///
/// # Errors
///
/// Returns an error when the jail cannot be created or `setup` fails.
///
/// # Examples
///
/// ```
/// use test_helpers::figment::load_in_jail;
///
/// let label = load_in_jail(
///     |jail| {
///         jail.set_env("ATTEMPT_LABEL", "jailed");
///         Ok(())
///     },
///     || std::env::var("ATTEMPT_LABEL"),
/// )
/// .expect("jail runs");
/// assert_eq!(label.ok().as_deref(), Some("jailed"));
/// ```
pub fn load_in_jail<T, E, S, L>(setup: S, load: L) -> Result<std::result::Result<T, E>>
where
    S: FnOnce(&mut Jail) -> figment::error::Result<()>,
    L: FnOnce() -> std::result::Result<T, E>,
{
    let mut loaded = None;
    Jail::try_with(|jail| {
        setup(jail)?;
        loaded = Some(load());
        Ok(())
    })
    .map_err(|err| anyhow!("policy jail setup failed: {err}"))?;
    loaded.context("policy jail did not run the loader")
}

/// Jail setup that leaves the working directory and environment empty.
///
/// # Errors
///
/// Never fails; the signature matches [`load_in_jail`]'s setup parameter.
pub const fn empty_jail(_: &mut Jail) -> figment::error::Result<()> {
    Ok(())
}
