use std::fmt::{self, Display};

use super::{error::Result, Edge};

/// 頂点番号と隣接リストの列を返せるグラフ
pub trait Graph {
    type Weight;

    fn vertex_count(&self) -> usize;

    fn neighbors(&self, v: usize) -> Result<&[Edge<Self::Weight>]>;

    /// `(v, neighbors(v))` を頂点番号の昇順で返す
    fn adjacencies(&self) -> impl Iterator<Item = (usize, &[Edge<Self::Weight>])> {
        // v < vertex_count なので neighbors は失敗しない
        (0..self.vertex_count()).map(move |v| {
            let edges = self
                .neighbors(v)
                .expect("neighbors must succeed for every v < vertex_count");
            (v, edges)
        })
    }

    fn display(&self) -> Adjacencies<'_, Self>
    where
        Self: Sized,
    {
        Adjacencies(self)
    }
}

/// 一行に一頂点 `v -> [to (weight), ...]` で表示する
pub struct Adjacencies<'a, G>(pub &'a G);

impl<G> Display for Adjacencies<'_, G>
where
    G: Graph,
    G::Weight: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, edges) in self.0.adjacencies() {
            write!(f, "{v} -> [")?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{edge}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
