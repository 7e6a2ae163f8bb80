//! Models command handler.

use blastconvert_core::ModelCatalog;

/// Print the catalog, marking the default.
pub fn execute(catalog: &ModelCatalog) {
    print!("{}", render(catalog));
}

fn render(catalog: &ModelCatalog) -> String {
    catalog
        .list()
        .iter()
        .map(|model| {
            if model == catalog.default_model() {
                format!("{model} (default)\n")
            } else {
                format!("{model}\n")
            }
        })
        .collect()
}
