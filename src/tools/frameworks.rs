use crate::catalog::Catalog;
use crate::error::Result;
use crate::library::Library;
use std::fmt::Write as _;

/// List configured frameworks with their document counts.
pub fn handle_list_frameworks(library: &Library) -> Result<String> {
    if library.is_empty() {
        return Ok(
            "No frameworks available. Check that the documentation root contains framework directories."
                .to_string(),
        );
    }

    let catalog = Catalog::build(library);
    let counts = catalog.counts(library);

    let mut output = format!("# Available frameworks ({})\n\n", counts.len());
    for (name, count) in counts {
        writeln!(output, "• **{}**: {} documents", name, count)?;
    }
    writeln!(
        output,
        "\nTotal: {} documents. Use list_sections to browse a framework.",
        catalog.len()
    )?;

    Ok(output)
}
