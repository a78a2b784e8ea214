//! Name lookup shared by every family's procedure enum.

use std::fmt;

use crate::error::UnknownProcedure;

/// Find the procedure whose display name or slug matches `input`, using the
/// catalog's matching rule so procedures and catalog entries resolve alike.
pub(crate) fn lookup<P: Copy + fmt::Display>(
    all: &[P],
    input: &str,
) -> Result<P, UnknownProcedure> {
    all.iter()
        .copied()
        .find(|procedure| algoviz_catalog::matches_name(&procedure.to_string(), input))
        .ok_or_else(|| UnknownProcedure(input.trim().to_string()))
}
