//! Property runners shared by the proptest and rstest suites.
//!
//! - **Oracle equivalence**: Kruskal matches the oracle forest weight; Prim
//!   matches the oracle tree over the first node's component; on connected
//!   graphs both agree and produce `n - 1` edges.
//! - **Structure**: accepted edges exist in the input, are acyclic, and cover
//!   exactly the expected components.
//! - **Idempotence**: re-runs agree on edges, cost and operation count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::{Edge, Graph, NodeIndex};
use crate::mst::{MstResult, kruskal_mst, prim_mst};

use super::oracle::{minimum_forest, minimum_tree_from_first, reachable_from_first};
use super::types::MstFixture;

fn describe(fixture: &MstFixture) -> String {
    format!(
        "distribution={:?}, nodes={}, edges={}",
        fixture.distribution,
        fixture.graph.node_count(),
        fixture.graph.edge_count(),
    )
}

fn ensure(condition: bool, fixture: &MstFixture, message: impl FnOnce() -> String) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{} ({})",
            message(),
            describe(fixture)
        )))
    }
}

pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let prim = prim_mst(graph);
    let kruskal = kruskal_mst(graph);
    let forest = minimum_forest(graph);
    let tree = minimum_tree_from_first(graph);

    ensure(kruskal.total_cost() == forest.total_weight, fixture, || {
        format!(
            "kruskal cost {} != oracle forest {}",
            kruskal.total_cost(),
            forest.total_weight
        )
    })?;
    ensure(prim.total_cost() == tree.total_weight, fixture, || {
        format!(
            "prim cost {} != oracle tree {}",
            prim.total_cost(),
            tree.total_weight
        )
    })?;

    if fixture.connected {
        let distinct = NodeIndex::new(graph).len();
        ensure(prim.total_cost() == kruskal.total_cost(), fixture, || {
            format!(
                "connected graph: prim {} != kruskal {}",
                prim.total_cost(),
                kruskal.total_cost()
            )
        })?;
        ensure(prim.spans(distinct) && kruskal.spans(distinct), fixture, || {
            format!(
                "connected graph: expected {} edges, prim {} kruskal {}",
                distinct.saturating_sub(1),
                prim.edge_count(),
                kruskal.edge_count()
            )
        })?;
    }
    Ok(())
}

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let prim = prim_mst(graph);
    let kruskal = kruskal_mst(graph);

    for result in [&prim, &kruskal] {
        validate_edges_exist(fixture, result)?;
        validate_acyclic(fixture, result)?;
    }

    let forest = minimum_forest(graph);
    ensure(kruskal.edge_count() == forest.edge_count, fixture, || {
        format!(
            "kruskal accepted {} edges, forest needs {} ({} components)",
            kruskal.edge_count(),
            forest.edge_count,
            forest.component_count
        )
    })?;

    let reachable = reachable_from_first(graph);
    let reachable_count = reachable.iter().filter(|&&reached| reached).count();
    ensure(
        prim.edge_count() == reachable_count.saturating_sub(1),
        fixture,
        || {
            format!(
                "prim accepted {} edges for a component of {} nodes",
                prim.edge_count(),
                reachable_count
            )
        },
    )?;

    let index = NodeIndex::new(graph);
    let outside = prim.edges().iter().find(|edge| {
        [edge.source(), edge.target()]
            .into_iter()
            .any(|label| index.get(label).is_none_or(|node| !reachable[node]))
    });
    ensure(outside.is_none(), fixture, || {
        format!("prim left the first component via {outside:?}")
    })
}

pub(super) fn run_idempotence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    for engine in [prim_mst as fn(&Graph) -> MstResult, kruskal_mst] {
        let first = engine(graph);
        let second = engine(graph);
        ensure(first.same_outcome(&second), fixture, || {
            format!(
                "{} re-run diverged: {:?} vs {:?}",
                first.algorithm().as_str(),
                first.edges(),
                second.edges()
            )
        })?;
    }
    Ok(())
}

fn validate_edges_exist(fixture: &MstFixture, result: &MstResult) -> TestCaseResult {
    let declared = |accepted: &Edge| {
        fixture.graph.edges().iter().any(|edge| {
            edge.weight() == accepted.weight() && edge.connects(accepted.source(), accepted.target())
        })
    };
    let missing = result.edges().iter().find(|edge| !declared(edge));
    ensure(missing.is_none(), fixture, || {
        format!(
            "{} accepted an undeclared edge {missing:?}",
            result.algorithm().as_str()
        )
    })
}

fn validate_acyclic(fixture: &MstFixture, result: &MstResult) -> TestCaseResult {
    let index = NodeIndex::new(&fixture.graph);
    let mut sets = crate::mst::DisjointSet::new(index.len());
    for edge in result.edges() {
        let (Some(a), Some(b)) = (index.get(edge.source()), index.get(edge.target())) else {
            return Err(TestCaseError::fail(format!(
                "{} accepted edge {edge} with an unknown endpoint ({})",
                result.algorithm().as_str(),
                describe(fixture)
            )));
        };
        ensure(sets.union(a, b), fixture, || {
            format!("{} closed a cycle with {edge}", result.algorithm().as_str())
        })?;
    }
    Ok(())
}
