//! Reading graph descriptions and writing parent arrays.
//!
//! Input is a header line `n m src` followed by `m` edge lines `u v w`. Each
//! of those lines holds exactly three fields separated by spaces or tabs;
//! blank lines are skipped. Output is one `v<TAB>parent` line per vertex,
//! with `NIL` for vertices that have no parent.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::mem::size_of;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::graph::{AdjacencyMatrix, Edge, Graph, Weight, WeightedEdge};
use crate::heap::{HeapNode, Key};

/// Upper bound on edges reserved up front, whatever the header claims.
const MAX_PREALLOCATED_EDGES: usize = 1 << 20;

/// Memory one vertex needs across its adjacency row, the key and parent
/// arrays, and its heap slot and position entry.
const BYTES_PER_VERTEX: usize = size_of::<SmallVec<[Edge; 4]>>()
    + size_of::<Key>()
    + size_of::<Option<usize>>()
    + size_of::<HeapNode>()
    + size_of::<Option<usize>>();

/// A parsed input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    pub vertex_count: usize,
    pub source: usize,
    pub edges: Vec<WeightedEdge>,
}

impl GraphInput {
    /// Adjacency-list graph with both directions of every edge.
    pub fn to_graph(&self) -> Graph {
        Graph::from_edges(self.vertex_count, &self.edges)
    }

    /// Like [`GraphInput::to_graph`], but an adjacency array that cannot be
    /// allocated is reported as malformed input instead of aborting.
    pub fn try_to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::try_new(self.vertex_count).map_err(|e| {
            Error::malformed(
                1,
                format!("vertex count {} is too large: {}", self.vertex_count, e),
            )
        })?;
        for edge in &self.edges {
            graph.add_undirected_edge(edge.u, edge.v, edge.weight);
        }
        Ok(graph)
    }

    pub fn to_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(self.vertex_count, &self.edges)
    }
}

/// Non-blank input lines, each split into exactly three fields.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            last_line: 1,
        }
    }

    /// Next non-blank line as `(line number, fields)`.
    fn next_record(&mut self, what: &str) -> Result<(usize, [&'a str; 3])> {
        for (idx, text) in self.lines.by_ref() {
            let line = idx + 1;
            self.last_line = line;

            let fields: SmallVec<[&'a str; 4]> = text.split_ascii_whitespace().take(4).collect();
            match fields.as_slice() {
                [] => continue,
                &[a, b, c] => return Ok((line, [a, b, c])),
                _ => {
                    return Err(Error::malformed(
                        line,
                        format!(
                            "{} needs 3 fields, found {}",
                            what,
                            text.split_ascii_whitespace().count()
                        ),
                    ))
                }
            }
        }
        Err(Error::malformed(self.last_line, format!("missing {}", what)))
    }

    /// Line number of the first non-blank line left, if any.
    fn next_non_blank(&mut self) -> Option<usize> {
        self.lines
            .by_ref()
            .find(|(_, text)| !text.trim().is_empty())
            .map(|(idx, _)| idx + 1)
    }
}

fn parse_field<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::malformed(line, format!("invalid {} {:?}", what, token)))
}

/// Parse a graph description.
pub fn parse_graph(text: &str) -> Result<GraphInput> {
    let mut records = Records::new(text);

    let (header_line, [n, m, src]) = records.next_record("header")?;
    let vertex_count: usize = parse_field(header_line, n, "vertex count")?;
    let edge_count: usize = parse_field(header_line, m, "edge count")?;
    let source: usize = parse_field(header_line, src, "source vertex")?;

    let fits = vertex_count
        .checked_mul(BYTES_PER_VERTEX)
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !fits {
        return Err(Error::malformed(
            header_line,
            format!("vertex count {} is too large", vertex_count),
        ));
    }

    if vertex_count > 0 && source >= vertex_count {
        return Err(Error::malformed(
            header_line,
            format!(
                "source vertex {} out of range for {} vertices",
                source, vertex_count
            ),
        ));
    }

    let mut edges = Vec::with_capacity(edge_count.min(MAX_PREALLOCATED_EDGES));
    for i in 0..edge_count {
        let (line, [u, v, w]) = records.next_record(&format!("edge {}", i))?;
        let u: usize = parse_field(line, u, &format!("endpoint of edge {}", i))?;
        let v: usize = parse_field(line, v, &format!("endpoint of edge {}", i))?;
        let weight: Weight = parse_field(line, w, &format!("weight of edge {}", i))?;

        for endpoint in [u, v] {
            if endpoint >= vertex_count {
                return Err(Error::malformed(
                    line,
                    format!(
                        "vertex {} out of range for {} vertices",
                        endpoint, vertex_count
                    ),
                ));
            }
        }
        edges.push(WeightedEdge::new(u, v, weight));
    }

    if let Some(line) = records.next_non_blank() {
        return Err(Error::malformed(
            line,
            format!("unexpected line after the {} announced edges", edge_count),
        ));
    }

    debug!(
        "parsed graph: {} vertices, {} edges, source {}",
        vertex_count,
        edges.len(),
        source
    );
    Ok(GraphInput {
        vertex_count,
        source,
        edges,
    })
}

/// Memory-map and parse an input file.
pub fn read_graph(path: impl AsRef<Path>) -> Result<GraphInput> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let len = file
        .metadata()
        .map_err(|e| Error::file_access(path, e))?
        .len();

    // Zero-length files cannot be mapped on every platform.
    if len == 0 {
        return parse_graph("");
    }

    // SAFETY: the mapping is read-only and dropped before this function
    // returns; the file is not expected to change while we parse it.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::file_access(path, e))?;
    let text = std::str::from_utf8(&mmap)
        .map_err(|e| Error::malformed(1, format!("input is not valid UTF-8: {}", e)))?;
    parse_graph(text)
}

/// Render the parent array in output format.
pub fn format_parents(parents: &[Option<usize>]) -> String {
    let mut out = String::with_capacity(parents.len() * 8);
    for (vertex, parent) in parents.iter().enumerate() {
        match parent {
            Some(p) => out.push_str(&format!("{}\t{}\n", vertex, p)),
            None => out.push_str(&format!("{}\tNIL\n", vertex)),
        }
    }
    out
}

/// Write the parent array to any writer.
pub fn write_parents<W: Write>(writer: &mut W, parents: &[Option<usize>]) -> std::io::Result<()> {
    writer.write_all(format_parents(parents).as_bytes())?;
    writer.flush()
}

/// Create (or truncate) `path` and write the parent array into it.
pub fn write_parents_to_path(path: impl AsRef<Path>, parents: &[Option<usize>]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::file_access(path, e))?;
    let mut writer = BufWriter::new(file);
    write_parents(&mut writer, parents).map_err(|e| Error::file_access(path, e))
}
