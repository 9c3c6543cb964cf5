use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Fixed, in-memory list of items served by the demo endpoints.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn generate(count: i64) -> Self {
        let items = (1..=count.max(0))
            .map(|id| Item {
                id,
                name: format!("Item {id}"),
            })
            .collect();

        Catalog { items }
    }

    pub fn count(&self) -> i64 {
        self.items.len() as i64
    }

    /// Returns up to `limit` items after skipping `offset`; a `limit` of `0`
    /// returns everything from `offset` on. Offsets past the end give an
    /// empty list.
    pub fn list(&self, limit: i64, offset: i64) -> &[Item] {
        let start = usize::try_from(offset).unwrap_or(0).min(self.items.len());
        let rest = &self.items[start..];

        match usize::try_from(limit) {
            Ok(0) | Err(_) => rest,
            Ok(limit) => &rest[..limit.min(rest.len())],
        }
    }
}
