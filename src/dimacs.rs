use std::fs;
use std::path::Path;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::map_res;
use nom::sequence::{preceded, separated_pair, terminated};

use crate::error::InputError;
use crate::graph::Graph;

/// reads an unsigned integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces (trailing spaces allowed)
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(separated_pair(read_integer, space1, read_integer), space0)(s)
}

/// true if the line is a comment (or empty)
fn is_comment(line:&str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('c')
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge "), tag("p col "))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(terminated(tag("e"), space1), read_two_integers)(s)
}

/** parses a DIMACS instance. Vertices keep their DIMACS labels (1..=n), so
isolated vertices declared by the header are part of the graph. */
pub fn read_from_str(content:&str) -> Result<Graph<usize>, InputError> {
    let content = content.replace("\r", "");
    let mut header:Option<(usize,usize)> = None;
    let mut edges:Vec<(usize,usize)> = Vec::new();
    for (i,line) in content.lines().enumerate() {
        let line_nb = i+1;
        if is_comment(line) { continue; }
        match header {
            None => {
                let (rest,(n,m)) = read_header(line).map_err(|_|
                    InputError::parse(line_nb, format!("expected 'p edge n m', found '{}'", line))
                )?;
                if !rest.is_empty() {
                    return Err(InputError::parse(line_nb, format!("unexpected '{}' after header", rest)));
                }
                header = Some((n,m));
            },
            Some((n,_)) => {
                let (rest,(a,b)) = read_edge(line).map_err(|_|
                    InputError::parse(line_nb, format!("expected 'e u v', found '{}'", line))
                )?;
                if !rest.is_empty() {
                    return Err(InputError::parse(line_nb, format!("unexpected '{}' after edge", rest)));
                }
                if a == 0 || b == 0 || a > n || b > n {
                    return Err(InputError::parse(line_nb, format!("edge ({},{}) out of range 1..={}", a, b, n)));
                }
                edges.push((a,b));
            }
        }
    }
    let (n,m) = header.ok_or_else(||
        InputError::parse(content.lines().count().max(1), "missing 'p edge n m' header")
    )?;
    // some files list every edge twice
    if edges.len() != m && edges.len() != 2*m {
        log::warn!("header announces {} edges, {} read", m, edges.len());
    }
    Ok(Graph::with_nodes(1..=n, edges))
}

/// creates an instance from a DIMACS file
pub fn read_from_file<P:AsRef<Path>>(filename:P) -> Result<Graph<usize>, InputError> {
    let content = fs::read_to_string(filename.as_ref())?;
    read_from_str(&content)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let inst = read_from_file("insts/brooks/cycle6.col").unwrap();
        assert_eq!(inst.nb_vertices(), 6);
        assert_eq!(inst.nb_edges(), 6);
        assert_eq!(inst.neighbors(0), &[1,5]);
    }

    #[test]
    fn test_read_cubic() {
        let inst = read_from_file("insts/brooks/cubic8.col").unwrap();
        assert_eq!(inst.nb_vertices(), 8);
        assert_eq!(inst.nb_edges(), 12);
        assert!(inst.vertices().all(|u| inst.degree(u) == 3));
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1";
        assert_eq!(read_header(s).unwrap(), ("", (2,1)));
    }

    #[test]
    fn test_read_header_col() {
        let s = "p col 2 1  ";
        assert_eq!(read_header(s).unwrap(), ("", (2,1)));
    }

    #[test]
    fn test_read_edge() {
        assert_eq!(read_edge("e 1 2").unwrap(), ("", (1,2)));
        assert!(read_edge("e 1").is_err());
    }

    #[test]
    fn test_comments_and_isolated_vertices() {
        let s = "c a comment\r\nc another one\np edge 4 2\ne 1 2\n\ne 2 3\n";
        let g = read_from_str(s).unwrap();
        assert_eq!(g.nb_vertices(), 4);
        assert_eq!(g.nb_edges(), 2);
        assert_eq!(g.degree(g.index_of(&4).unwrap()), 0);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(read_from_str("e 1 2\n"), Err(InputError::Parse { line:1, .. })));
        assert!(matches!(read_from_str("p edge 3 1\ne 1 4\n"), Err(InputError::Parse { line:2, .. })));
        assert!(matches!(read_from_str("p edge 3 1\nx 1 2\n"), Err(InputError::Parse { line:2, .. })));
        assert!(matches!(read_from_str("c only\n"), Err(InputError::Parse { line:1, .. })));
        assert!(matches!(read_from_str("c first\nc second\n\n"), Err(InputError::Parse { line:3, .. })));
        assert!(matches!(read_from_str(""), Err(InputError::Parse { line:1, .. })));
        assert!(matches!(read_from_file("insts/brooks/missing.col"), Err(InputError::Io(_))));
    }
}
