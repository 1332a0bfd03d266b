//! Parallel tree building over many independent graphs.
//!
//! Each graph is validated and walked on its own; nothing is shared between
//! invocations, so results are identical to calling the sequential builder in
//! a loop.

use rayon::prelude::*;

use crate::error::TreeResult;
use crate::graph::dfs::{DfsTree, DfsTreeBuilder};

/// Builds the spanning tree (rooted at 0) of every graph, in input order.
pub fn build_many<G, R>(graphs: &[G]) -> Vec<TreeResult<DfsTree>>
where
    G: AsRef<[R]> + Sync,
    R: AsRef<[usize]>,
{
    build_many_with(&DfsTreeBuilder::new(), graphs)
}

/// Like [`build_many`], using `builder`'s options for every graph.
pub fn build_many_with<G, R>(builder: &DfsTreeBuilder, graphs: &[G]) -> Vec<TreeResult<DfsTree>>
where
    G: AsRef<[R]> + Sync,
    R: AsRef<[usize]>,
{
    graphs
        .par_iter()
        .map(|graph| builder.build(graph.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use crate::graph::dfs::build_dfs_tree;

    #[test]
    fn matches_sequential_builds() {
        let graphs: Vec<Vec<Vec<usize>>> = vec![
            vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]],
            vec![vec![1], vec![0, 2], vec![1, 3], vec![2]],
            vec![vec![]],
            vec![],
        ];
        let results = build_many(&graphs);
        assert_eq!(results.len(), graphs.len());
        for (graph, result) in graphs.iter().zip(&results) {
            assert_eq!(result, &build_dfs_tree(graph));
        }
        assert_eq!(results[3], Err(TreeError::EmptyGraph));
    }

    #[test]
    fn builder_options_apply_to_every_graph() {
        let graphs: Vec<Vec<Vec<usize>>> = vec![vec![vec![1], vec![0]], vec![vec![1], vec![]]];
        let builder = DfsTreeBuilder::new().require_symmetric(true);
        let results = build_many_with(&builder, &graphs);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(TreeError::AsymmetricEdge { from: 0, to: 1 }));
    }
}
