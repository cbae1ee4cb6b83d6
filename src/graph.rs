pub mod error;
pub mod traits;

use std::fmt::{self, Display};

use num_traits::Float;
use tracing::{debug, trace};

use self::error::{GraphError, Result};
use self::traits::Graph;

/// 重み付きの有向辺。始点の隣接リストが所有する。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W = f64> {
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub const fn new(to: usize, weight: W) -> Self {
        Self { to, weight }
    }
}

impl<W: Display> Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.to, self.weight)
    }
}

/// 頂点数固定の重み付き有向グラフ。多重辺・自己ループも挿入順のまま保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph<W = f64> {
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> WeightedGraph<W> {
    pub fn new(vertex_count: usize) -> Self {
        debug!(vertex_count, "creating weighted graph");
        Self {
            adjacency: (0..vertex_count).map(|_| Vec::new()).collect(),
        }
    }

    /// [`WeightedGraph::new`] の確保失敗を [`GraphError::OutOfMemory`] で返す版
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        debug!(vertex_count, "created weighted graph");
        Ok(Self { adjacency })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn check(&self, v: usize) -> Result<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        let edges = &mut self.adjacency[from];
        edges.try_reserve(1)?;
        edges.push(Edge { to, weight });
        trace!(from, to, "added edge");
        Ok(())
    }

    /// `a -> b` と `b -> a` を同じ重みで追加する。失敗時はグラフを変更しない。
    pub fn add_bidirectional_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()>
    where
        W: Clone,
    {
        self.check(a)?;
        self.check(b)?;
        // a == b の自己ループは同じリストに二本入る
        let extra = if a == b { 2 } else { 1 };
        self.adjacency[a].try_reserve(extra)?;
        self.adjacency[b].try_reserve(1)?;
        self.adjacency[a].push(Edge::new(b, weight.clone()));
        self.adjacency[b].push(Edge::new(a, weight));
        trace!(a, b, "added bidirectional edge");
        Ok(())
    }

    pub fn neighbors(&self, v: usize) -> Result<&[Edge<W>]> {
        self.check(v)?;
        Ok(&self.adjacency[v])
    }

    pub fn out_degree(&self, v: usize) -> Result<usize> {
        self.neighbors(v).map(<[_]>::len)
    }

    /// 出辺の重みの総和
    pub fn out_weight(&self, v: usize) -> Result<W>
    where
        W: Float,
    {
        Ok(self
            .neighbors(v)?
            .iter()
            .fold(W::zero(), |acc, e| acc + e.weight))
    }
}

impl<W> Graph for WeightedGraph<W> {
    type Weight = W;

    fn vertex_count(&self) -> usize {
        WeightedGraph::vertex_count(self)
    }

    fn neighbors(&self, v: usize) -> Result<&[Edge<W>]> {
        WeightedGraph::neighbors(self, v)
    }
}

/// 頂点ごとの `(to, weight)` リストから作る。範囲外の辺はエラー。
impl<W> TryFrom<Vec<Vec<(usize, W)>>> for WeightedGraph<W> {
    type Error = GraphError;

    fn try_from(lists: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let mut graph = Self::try_new(lists.len())?;
        for (from, list) in lists.into_iter().enumerate() {
            for (to, weight) in list {
                graph.add_edge(from, to, weight)?;
            }
        }
        Ok(graph)
    }
}

/// 無向グラフ。辺の追加は常に [`WeightedGraph::add_bidirectional_edge`] になる。
#[derive(Debug, Clone, PartialEq)]
pub struct UndirectedGraph<W = f64>(WeightedGraph<W>);

impl<W> UndirectedGraph<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self(WeightedGraph::new(vertex_count))
    }

    pub fn try_new(vertex_count: usize) -> Result<Self> {
        WeightedGraph::try_new(vertex_count).map(Self)
    }

    pub fn neighbors(&self, v: usize) -> Result<&[Edge<W>]> {
        self.0.neighbors(v)
    }

    pub fn as_directed(&self) -> &WeightedGraph<W> {
        &self.0
    }

    pub fn into_directed(self) -> WeightedGraph<W> {
        self.0
    }
}

impl<W: Clone> UndirectedGraph<W> {
    pub fn add_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.0.add_bidirectional_edge(a, b, weight)
    }
}

impl<W> Graph for UndirectedGraph<W> {
    type Weight = W;

    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn neighbors(&self, v: usize) -> Result<&[Edge<W>]> {
        self.0.neighbors(v)
    }
}
