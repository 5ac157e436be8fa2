use std::io;

use serde::Serialize;

use super::store::{ChecklistStore, KeyValueStore};
use crate::guide::domain::DegreeLevel;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write checklist csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush checklist csv: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    index: usize,
    item: &'a str,
    completed: bool,
}

/// Writes a printable checklist as `index,item,completed` rows in definition order.
pub fn export_csv<S, W>(
    store: &ChecklistStore<S>,
    degree: DegreeLevel,
    writer: W,
) -> Result<(), ExportError>
where
    S: KeyValueStore,
    W: io::Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for item in store.items(degree) {
        csv_writer.serialize(ExportRow {
            index: item.index,
            item: item.label,
            completed: item.completed,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::checklist::InMemoryStore;
    use std::sync::Arc;

    #[test]
    fn export_lists_every_item_with_flags() {
        let store = ChecklistStore::new(Arc::new(InMemoryStore::default()));
        store
            .set_item(DegreeLevel::Graduate, 2, true)
            .expect("stored");

        let mut buffer = Vec::new();
        export_csv(&store, DegreeLevel::Graduate, &mut buffer).expect("export succeeds");
        let text = String::from_utf8(buffer).expect("utf8 output");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "index,item,completed");
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[1], "0,Take GRE or GMAT,false");
        assert_eq!(
            lines[3],
            "2,Write statement of purpose (500-1000 words),true"
        );
    }
}
