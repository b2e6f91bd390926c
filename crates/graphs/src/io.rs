//! Readers for the plain-text graph formats.
//!
//! Vertex labels in every format are 1-indexed and become 0-indexed vertex
//! indices. Blank lines are ignored. Each `parse_*` function takes the text
//! of a file, and each `read_*` function reads the file at a path first.

use std::{collections::HashSet, path::Path};

use distances::Number;

use crate::{DirectedGraph, Edge, Graph, UndirectedGraph};

/// Reads a file to a `String`.
fn read<P: AsRef<Path>>(path: P) -> Result<String, String> {
    std::fs::read_to_string(path.as_ref()).map_err(|e| format!("Could not read {:?}: {e}", path.as_ref()))
}

/// The non-blank lines of `text`, split into tokens, with 1-indexed line
/// numbers.
fn token_lines(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> + '_ {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty())
}

/// Parses a 1-indexed vertex label into a vertex index.
fn parse_label(token: &str, line: usize) -> Result<usize, String> {
    let label = token
        .parse::<usize>()
        .map_err(|e| format!("Line {line}: invalid vertex label {token:?}: {e}"))?;
    label
        .checked_sub(1)
        .ok_or_else(|| format!("Line {line}: vertex labels start at 1."))
}

/// Parses an `Edge` cost.
fn parse_cost<U: Number>(token: &str, line: usize) -> Result<U, String> {
    token
        .parse::<U>()
        .map_err(|_| format!("Line {line}: invalid cost {token:?}."))
}

/// Parses a count.
fn parse_count(token: &str, line: usize, what: &str) -> Result<usize, String> {
    token
        .parse::<usize>()
        .map_err(|e| format!("Line {line}: invalid {what} {token:?}: {e}"))
}

/// Parses an unweighted adjacency list into an undirected `Graph`.
///
/// Each line holds a vertex label followed by the labels of its neighbors.
/// Each `Edge` is usually listed from both endpoints but is added only once,
/// with unit cost.
///
/// # Errors
///
/// * If a label is not a positive integer.
pub fn parse_adjacency<U: Number>(text: &str) -> Result<UndirectedGraph<U>, String> {
    let mut graph = Graph::new();
    let mut seen = HashSet::new();
    for (line, tokens) in token_lines(text) {
        let v = parse_label(tokens[0], line)?;
        graph.add_vertex(v);
        for &token in &tokens[1..] {
            let w = parse_label(token, line)?;
            if seen.insert((v.min(w), v.max(w))) {
                graph.add_edge(Edge::unit(v, w));
            }
        }
    }
    Ok(graph)
}

/// Reads an unweighted adjacency list file. See `parse_adjacency`.
///
/// # Errors
///
/// * If the file cannot be read.
/// * See `parse_adjacency`.
pub fn read_adjacency<U: Number, P: AsRef<Path>>(path: P) -> Result<UndirectedGraph<U>, String> {
    parse_adjacency(&read(path)?)
}

/// Parses a weighted edge list into an undirected `Graph`.
///
/// The first line holds the number of vertices, optionally followed by the
/// number of `Edge`s. Each following line holds two labels and a cost.
///
/// # Errors
///
/// * If the header is missing or malformed.
/// * If an `Edge` line does not have exactly three tokens.
/// * If a label exceeds the declared number of vertices.
/// * If the declared number of `Edge`s does not match the lines.
pub fn parse_weighted_edges<U: Number>(text: &str) -> Result<UndirectedGraph<U>, String> {
    let mut lines = token_lines(text);
    let (line, header) = lines.next().ok_or_else(|| "Missing header line.".to_string())?;
    let (n, m) = match header.as_slice() {
        [n] => (parse_count(n, line, "vertex count")?, None),
        [n, m] => (
            parse_count(n, line, "vertex count")?,
            Some(parse_count(m, line, "edge count")?),
        ),
        _ => return Err(format!("Line {line}: expected a header with one or two counts.")),
    };

    let mut graph = Graph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for (line, tokens) in lines {
        let [a, b, c] = tokens.as_slice() else {
            return Err(format!("Line {line}: expected two labels and a cost."));
        };
        let (a, b) = (parse_label(a, line)?, parse_label(b, line)?);
        if a >= n || b >= n {
            return Err(format!("Line {line}: labels must be at most {n}."));
        }
        graph.add_edge(Edge::new(a, b, parse_cost(c, line)?));
    }

    if let Some(m) = m {
        if m != graph.edge_count() {
            return Err(format!("Expected {m} edges but found {}.", graph.edge_count()));
        }
    }
    Ok(graph)
}

/// Reads a weighted edge list file. See `parse_weighted_edges`.
///
/// # Errors
///
/// * If the file cannot be read.
/// * See `parse_weighted_edges`.
pub fn read_weighted_edges<U: Number, P: AsRef<Path>>(path: P) -> Result<UndirectedGraph<U>, String> {
    parse_weighted_edges(&read(path)?)
}

/// Parses a weighted adjacency list into a directed `Graph`.
///
/// Each line holds a source label followed by `target,cost` pairs. Exact
/// duplicates of an `Edge` already read are skipped.
///
/// # Errors
///
/// * If a label is not a positive integer.
/// * If a pair is not of the form `target,cost`.
pub fn parse_weighted_adjacency<U: Number>(text: &str) -> Result<DirectedGraph<U>, String> {
    let mut graph: DirectedGraph<U> = Graph::new();
    for (line, tokens) in token_lines(text) {
        let v = parse_label(tokens[0], line)?;
        graph.add_vertex(v);
        for &pair in &tokens[1..] {
            let (w, c) = pair
                .split_once(',')
                .ok_or_else(|| format!("Line {line}: expected a pair `target,cost` but found {pair:?}."))?;
            let edge = Edge::new(v, parse_label(w, line)?, parse_cost(c, line)?);
            if !graph.out_edges(v).any(|(_, e)| *e == edge) {
                graph.add_edge(edge);
            }
        }
    }
    Ok(graph)
}

/// Reads a weighted adjacency list file. See `parse_weighted_adjacency`.
///
/// # Errors
///
/// * If the file cannot be read.
/// * See `parse_weighted_adjacency`.
pub fn read_weighted_adjacency<U: Number, P: AsRef<Path>>(path: P) -> Result<DirectedGraph<U>, String> {
    parse_weighted_adjacency(&read(path)?)
}

/// Parses a list of `source target` pairs into a directed `Graph` with unit
/// costs.
///
/// # Errors
///
/// * If a line does not have exactly two labels.
pub fn parse_edge_pairs<U: Number>(text: &str) -> Result<DirectedGraph<U>, String> {
    let mut graph = Graph::new();
    for (line, tokens) in token_lines(text) {
        let [a, b] = tokens.as_slice() else {
            return Err(format!("Line {line}: expected two labels."));
        };
        graph.add_edge(Edge::unit(parse_label(a, line)?, parse_label(b, line)?));
    }
    Ok(graph)
}

/// Reads a file of `source target` pairs. See `parse_edge_pairs`.
///
/// # Errors
///
/// * If the file cannot be read.
/// * See `parse_edge_pairs`.
pub fn read_edge_pairs<U: Number, P: AsRef<Path>>(path: P) -> Result<DirectedGraph<U>, String> {
    parse_edge_pairs(&read(path)?)
}

/// Parses binary labels.
///
/// The first line holds the number of labels and the number of bits. Each
/// following line holds the bits of one label, separated by whitespace, most
/// significant first.
///
/// # Returns
///
/// The labels and the number of bits.
///
/// # Errors
///
/// * If the header is malformed or declares more than 32 bits.
/// * If a line has the wrong number of bits or a token other than `0` or `1`.
/// * If the declared number of labels does not match the lines.
pub fn parse_binary_labels(text: &str) -> Result<(Vec<u32>, usize), String> {
    let mut lines = token_lines(text);
    let (line, header) = lines.next().ok_or_else(|| "Missing header line.".to_string())?;
    let [count, bits] = header.as_slice() else {
        return Err(format!("Line {line}: expected the number of labels and of bits."));
    };
    let (count, bits) = (parse_count(count, line, "label count")?, parse_count(bits, line, "bit count")?);
    if bits > 32 {
        return Err(format!("Line {line}: labels may have at most 32 bits but {bits} were declared."));
    }

    let mut labels = Vec::with_capacity(count);
    for (line, tokens) in lines {
        if tokens.len() != bits {
            return Err(format!("Line {line}: expected {bits} bits but found {}.", tokens.len()));
        }
        let label = tokens.iter().try_fold(0_u32, |label, &bit| match bit {
            "0" => Ok(label << 1),
            "1" => Ok((label << 1) | 1),
            _ => Err(format!("Line {line}: invalid bit {bit:?}.")),
        })?;
        labels.push(label);
    }

    if labels.len() != count {
        return Err(format!("Expected {count} labels but found {}.", labels.len()));
    }
    Ok((labels, bits))
}

/// Reads a file of binary labels. See `parse_binary_labels`.
///
/// # Errors
///
/// * If the file cannot be read.
/// * See `parse_binary_labels`.
pub fn read_binary_labels<P: AsRef<Path>>(path: P) -> Result<(Vec<u32>, usize), String> {
    parse_binary_labels(&read(path)?)
}
