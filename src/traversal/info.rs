use serde::Serialize;

use crate::traversal::Algorithm;

/// Descriptive catalog entry for an algorithm, shown next to the visualization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub category: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
    /// Reference implementation shown to the user.
    pub code: &'static str,
}

static DEPTH_FIRST: AlgorithmInfo = AlgorithmInfo {
    name: "Depth-First Search",
    category: "Graph",
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    description: "Explores graph by going as deep as possible before backtracking",
    difficulty: "Intermediate",
    code: r#"fn dfs(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        let mut next: Vec<_> = graph.out_neighbors(node).iter()
            .filter(|n| !visited.contains(*n)).copied().collect();
        next.sort_by(|a, b| b.cmp(a));
        for n in next {
            if !stack.contains(&n) {
                stack.push(n);
            }
        }
    }
    order
}"#,
};

static BREADTH_FIRST: AlgorithmInfo = AlgorithmInfo {
    name: "Breadth-First Search",
    category: "Graph",
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    description: "Explores graph level by level using a queue",
    difficulty: "Intermediate",
    code: r#"fn bfs(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        let mut next: Vec<_> = graph.out_neighbors(node).iter()
            .filter(|n| !visited.contains(*n) && !queue.contains(*n)).copied().collect();
        next.sort();
        queue.extend(next);
    }
    order
}"#,
};

impl AlgorithmInfo {
    pub fn of(algorithm: Algorithm) -> &'static AlgorithmInfo {
        match algorithm {
            Algorithm::DepthFirst => &DEPTH_FIRST,
            Algorithm::BreadthFirst => &BREADTH_FIRST,
        }
    }
}
