//! Properties of the buffer-access collector and the tiling classifier over
//! generated single-read blocks.

use std::collections::HashSet;

use kestrel_ir::test::property::generators::{IndexShape, arb_index_shape, arb_var_names};
use kestrel_ir::{DType, Expr, ScheduleBlock, Tensor, Var};
use proptest::prelude::*;

use crate::auto_schedule::analysis::{BufferAccessTable, indices_to_vars, needs_multi_level_tiling};
use crate::config::IndexPolicy;
use crate::test::helpers::realize;

/// `W[v0, .., vn] = R[shapes..]` over spatial vars `v0..vn`.
fn single_read_block(names: &[String], shapes: &[IndexShape]) -> (ScheduleBlock, Vec<Var>) {
    let vars: Vec<Var> = names.iter().map(Var::new).collect();
    let shape = |rank: usize| (0..rank).map(|_| Expr::int(16)).collect::<Vec<_>>();
    let read = Tensor::new("R", shape(shapes.len()), DType::Float32);
    let write = Tensor::new("W", shape(vars.len()), DType::Float32);

    let indices: Vec<Expr> = shapes.iter().map(|s| s.build(&vars)).collect();
    let value = Expr::load(&read, indices).expect("rank matches");
    let body = Expr::store(&write, value, &vars).expect("rank matches");
    (ScheduleBlock::new("W", vars.clone(), body), vars)
}

fn arb_block_shape() -> impl Strategy<Value = (Vec<String>, Vec<IndexShape>)> {
    arb_var_names(3).prop_flat_map(|names| {
        let n = names.len();
        (Just(names), prop::collection::vec(arb_index_shape(n), 1..=4))
    })
}

proptest! {
    /// Dropping keeps exactly the plain-variable indices, in order.
    #[test]
    fn drop_keeps_variable_indices((names, shapes) in arb_block_shape()) {
        let vars: Vec<Var> = names.iter().map(Var::new).collect();
        let indices: Vec<Expr> = shapes.iter().map(|s| s.build(&vars)).collect();

        let kept = indices_to_vars("R", &indices, IndexPolicy::Drop).unwrap();
        let expected: Vec<&str> = shapes
            .iter()
            .zip(&indices)
            .filter(|(shape, _)| shape.is_var())
            .map(|(_, index)| index.as_var().unwrap().name())
            .collect();
        prop_assert_eq!(kept.iter().map(Var::name).collect::<Vec<_>>(), expected);

        let rejected = indices_to_vars("R", &indices, IndexPolicy::Reject);
        prop_assert_eq!(rejected.is_err(), !shapes.iter().all(IndexShape::is_var));
    }

    /// The classifier agrees with counting unused spatial vars by hand.
    #[test]
    fn tiling_matches_brute_force((names, shapes) in arb_block_shape()) {
        let (block, vars) = single_read_block(&names, &shapes);
        let expr = realize(block.clone());
        let mut table = BufferAccessTable::default();
        table.analyze(&block).unwrap();

        let read_names: HashSet<String> = shapes
            .iter()
            .filter(|s| s.is_var())
            .map(|s| s.build(&vars).as_var().unwrap().name().to_string())
            .collect();
        let unused = vars.iter().filter(|v| !read_names.contains(v.name())).count();

        prop_assert_eq!(needs_multi_level_tiling(&expr, &table).unwrap(), unused >= 1);
    }

    /// Re-analysis returns the first result and adds no entries.
    #[test]
    fn analysis_is_idempotent((names, shapes) in arb_block_shape()) {
        let (block, _) = single_read_block(&names, &shapes);
        let mut table = BufferAccessTable::default();

        let first = table.analyze(&block).unwrap().clone();
        let second = table.analyze(&block).unwrap().clone();
        prop_assert_eq!(first, second);
        prop_assert_eq!(table.len(), 1);
    }
}
