//! Seeded permutation of atom records, used to exercise the invariance of
//! the canonicalization.
//!
//! Only the assignment of element symbols to positions is shuffled: the
//! positional index column stays untouched, and bond endpoints are rewritten
//! through the same permutation so that every bond still connects the same
//! physical pair of atoms.

use std::collections::HashMap;

use tracing::debug;

use crate::{BondRecord, MolfileRecords};

/// Deterministic Fisher-Yates permutation of `0..n` driven by an inline LCG.
fn permutation(n: usize, seed: u64) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    let mut state = seed.wrapping_add(1);
    for i in (1..n).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let j = (state as usize) % (i + 1);
        perm.swap(i, j);
    }
    perm
}

/// Returns a record set describing the same molecule with atom identities
/// relabeled: the symbol at position `p` moves to position `perm[p]`, and
/// every bond endpoint follows its atom. Deterministic for a given seed.
pub fn permute_records(records: &MolfileRecords, seed: u64) -> MolfileRecords {
    let n = records.atoms.len();
    let perm = permutation(n, seed);
    debug!(seed, atoms = n, "permuting atom records");

    let mut atoms = records.atoms.clone();
    for (p, record) in records.atoms.iter().enumerate() {
        atoms[perm[p]].symbol = record.symbol.clone();
    }

    // the atom formerly addressed by the index at position p is now
    // addressed by the index at position perm[p]
    let index_map: HashMap<usize, usize> = records
        .atoms
        .iter()
        .enumerate()
        .map(|(p, record)| (record.original_index, records.atoms[perm[p]].original_index))
        .collect();

    let bonds = records
        .bonds
        .iter()
        .map(|bond| BondRecord {
            original_index: bond.original_index,
            order: bond.order,
            a: index_map.get(&bond.a).copied().unwrap_or(bond.a),
            b: index_map.get(&bond.b).copied().unwrap_or(bond.b),
        })
        .collect();

    MolfileRecords {
        declared_atom_count: records.declared_atom_count,
        declared_bond_count: records.declared_bond_count,
        atoms,
        bonds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AtomRecord, MolfileRecords, Symbol};

    fn ammonia() -> MolfileRecords {
        MolfileRecords {
            declared_atom_count: 4,
            declared_bond_count: 3,
            atoms: ["H", "H", "H", "N"]
                .iter()
                .enumerate()
                .map(|(i, s)| AtomRecord {
                    symbol: Symbol::new(s),
                    original_index: i + 1,
                })
                .collect(),
            bonds: [(4, 1), (2, 4), (4, 3)]
                .iter()
                .enumerate()
                .map(|(i, &(a, b))| BondRecord {
                    original_index: i + 1,
                    order: 1,
                    a,
                    b,
                })
                .collect(),
        }
    }

    #[test]
    fn test_permutation_shuffles_atom_order() {
        // seed 0 maps positions [0,1,2,3] to [1,0,3,2], so the nitrogen
        // moves from the fourth position to the third
        let permuted = permute_records(&ammonia(), 0);
        let symbols: Vec<&str> = permuted.atoms.iter().map(|a| a.symbol.as_ref()).collect();
        assert_eq!(symbols, ["H", "H", "N", "H"]);
    }

    #[test]
    fn test_permutation_preserves_atom_indices() {
        let original = ammonia();
        let permuted = permute_records(&original, 0);
        let indices: Vec<usize> = original.atoms.iter().map(|a| a.original_index).collect();
        let permuted_indices: Vec<usize> =
            permuted.atoms.iter().map(|a| a.original_index).collect();
        assert_eq!(indices, permuted_indices);
    }

    #[test]
    fn test_permutation_updates_bonds() {
        let permuted = permute_records(&ammonia(), 0);
        let endpoints: Vec<(usize, usize)> = permuted.bonds.iter().map(|b| (b.a, b.b)).collect();
        // all hydrogens still connected to the nitrogen, which is now atom 3
        assert_eq!(endpoints, [(3, 2), (1, 3), (3, 4)]);
    }

    #[test]
    fn test_permutation_preserves_bond_indices_and_orders() {
        let original = ammonia();
        let permuted = permute_records(&original, 0);
        for (before, after) in original.bonds.iter().zip(&permuted.bonds) {
            assert_eq!(before.original_index, after.original_index);
            assert_eq!(before.order, after.order);
        }
    }

    #[test]
    fn test_bond_endpoints_follow_their_atoms() {
        // each bond must still connect the same physical pair: look the
        // endpoints up by symbol position before and after
        let original = ammonia();
        for seed in 0..16 {
            let permuted = permute_records(&original, seed);
            for (before, after) in original.bonds.iter().zip(&permuted.bonds) {
                let symbol_of = |records: &MolfileRecords, index: usize| {
                    records
                        .atoms
                        .iter()
                        .find(|a| a.original_index == index)
                        .map(|a| a.symbol.clone())
                        .unwrap()
                };
                let mut pair_before = [
                    symbol_of(&original, before.a),
                    symbol_of(&original, before.b),
                ];
                let mut pair_after =
                    [symbol_of(&permuted, after.a), symbol_of(&permuted, after.b)];
                pair_before.sort();
                pair_after.sort();
                assert_eq!(pair_before, pair_after);
            }
        }
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let original = ammonia();
        assert_eq!(
            permute_records(&original, 181),
            permute_records(&original, 181)
        );
    }

    #[test]
    fn test_counts_are_preserved() {
        let permuted = permute_records(&ammonia(), 7);
        assert_eq!(permuted.declared_atom_count, 4);
        assert_eq!(permuted.declared_bond_count, 3);
        assert_eq!(permuted.atoms.len(), 4);
        assert_eq!(permuted.bonds.len(), 3);
    }
}
