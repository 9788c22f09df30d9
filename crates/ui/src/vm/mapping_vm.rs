use cipher_core::model::Mapping;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingPairVm {
    pub source: char,
    pub cipher: char,
}

/// One row of the reference table: two pairs side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingRowVm {
    pub left: MappingPairVm,
    pub right: Option<MappingPairVm>,
}

#[must_use]
pub fn map_mapping_rows(mapping: &Mapping) -> Vec<MappingRowVm> {
    let pairs: Vec<MappingPairVm> = mapping
        .pairs()
        .map(|(source, cipher)| MappingPairVm {
            source: source.as_char(),
            cipher: cipher.as_char(),
        })
        .collect();

    pairs
        .chunks(2)
        .map(|chunk| MappingRowVm {
            left: chunk[0],
            right: chunk.get(1).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_two_pairs_per_row() {
        let rows = map_mapping_rows(&Mapping::al_bhed());
        assert_eq!(rows.len(), 13);
        assert_eq!(
            rows[0],
            MappingRowVm {
                left: MappingPairVm { source: 'A', cipher: 'Y' },
                right: Some(MappingPairVm { source: 'B', cipher: 'P' }),
            }
        );
        assert_eq!(rows[12].right, Some(MappingPairVm { source: 'Z', cipher: 'W' }));
    }
}
