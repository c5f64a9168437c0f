use super::model::Model;
use crate::errors::ConversionError;
use log::info;
use prettytable::{Table, row};
use std::fs;
use std::path::Path;

impl Model {
    ////////////////////////INPUT/OUTPUT////////////////////////////////////////////////////////

    /// Serializes the model as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, ConversionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the model as JSON to `path`
    pub fn write_json(&self, path: &Path) -> Result<(), ConversionError> {
        let content = self.to_json_string()?;
        fs::write(path, content).map_err(|e| ConversionError::io(path, e))?;
        info!("model written to '{}'", path.display());
        Ok(())
    }

    /// Reads a model previously written with [`Model::write_json`]
    pub fn read_json(path: &Path) -> Result<Model, ConversionError> {
        let content = fs::read_to_string(path).map_err(|e| ConversionError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// entity counts per category
    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["entity", "count"]);
        table.add_row(row!["compartments", self.compartments.len()]);
        table.add_row(row!["species", self.species.len()]);
        table.add_row(row!["reactions", self.reactions.len()]);
        table.add_row(row!["parameters", self.parameters.len()]);
        table.add_row(row!["gene products", self.gene_products.len()]);
        table.add_row(row!["groups", self.groups.len()]);
        table.add_row(row!["unit definitions", self.unit_definitions.len()]);
        table
    }

    /// Prints the entity counts to the console
    pub fn pretty_print_summary(&self) {
        println!(
            "__________model {}__________",
            self.id.as_deref().unwrap_or("<unnamed>")
        );
        self.summary_table().printstd();
        println!("_____________________________________________________________");
    }
}
