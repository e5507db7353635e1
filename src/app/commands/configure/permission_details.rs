use crate::domain::{AppError, Permission, PermissionDetails, Permissions};
use crate::ports::{Prompter, TextPrompt};

/// Second prompt round: a description and a required flag for every
/// selected permission, in selection order.
pub(super) fn collect<P: Prompter>(
    prompter: &P,
    selected: &[Permission],
    default_description: &str,
) -> Result<Permissions, AppError> {
    let total = selected.len();
    let mut permissions = Permissions::new();

    for (index, permission) in selected.iter().copied().enumerate() {
        let label = format!("Permission #{} of {} ({})", index + 1, total, permission.title());

        let description = prompter
            .text(TextPrompt::new(&format!("{label} description:"), default_description))?;
        let required = prompter.toggle(&format!("{label} required?"), true)?;

        permissions.insert(permission, PermissionDetails { description, required });
    }

    Ok(permissions)
}
