use fst::{IntoStreamer, Map, MapBuilder, Streamer};

use crate::core::error::Result;

/// FST-based index for prefix matching over title terms.
pub struct PrefixIndex {
    fst: Map<Vec<u8>>,
}

impl std::fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("len", &self.fst.len())
            .finish()
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        PrefixIndex {
            fst: Map::default(),
        }
    }
}

impl PrefixIndex {
    /// Build the fst from (term, doc frequency) pairs. Input must arrive
    /// in ascending term order; the generation's title-term map is a
    /// BTreeMap, which guarantees that.
    pub fn build<I>(&mut self, terms: I) -> Result<()>
    where
        I: Iterator<Item = (String, u32)>,
    {
        let mut builder = MapBuilder::memory();
        for (term, freq) in terms {
            builder.insert(term.as_bytes(), freq as u64)?;
        }
        self.fst = builder.into_map();
        Ok(())
    }

    /// All terms starting with `prefix`, in ascending term order.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let prefix_bytes = prefix.as_bytes();

        let mut stream = self.fst.range().ge(prefix_bytes).into_stream();
        while let Some((term_bytes, _freq)) = stream.next() {
            if !term_bytes.starts_with(prefix_bytes) {
                break;
            }
            if let Ok(term) = String::from_utf8(term_bytes.to_vec()) {
                results.push(term);
            }
        }

        results
    }
}
