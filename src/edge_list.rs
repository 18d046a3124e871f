//! Edge lists typed by hand: `1-2, 2-3; 3 4` or one pair per line.

use std::fs;
use std::path::Path;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{multispace0, one_of, space0, space1};
use nom::combinator::{opt, recognize};
use nom::multi::separated_list0;
use nom::sequence::{delimited, separated_pair, terminated, tuple};

use crate::error::InputError;
use crate::graph::Graph;

/// vertex label: letters, digits, '_' and '.'
fn token(s:&str) -> IResult<&str, &str> {
    take_while1(|c:char| c.is_alphanumeric() || c == '_' || c == '.')(s)
}

/// endpoints are separated by '-' or blanks
fn edge(s:&str) -> IResult<&str, (&str,&str)> {
    separated_pair(token, alt((delimited(space0, tag("-"), space0), space1)), token)(s)
}

/// pairs are separated by ',', ';' or newlines
fn pair_separator(s:&str) -> IResult<&str, &str> {
    recognize(tuple((space0, one_of(",;\n"), multispace0)))(s)
}

/// whole list (an optional trailing separator is accepted)
fn edges(s:&str) -> IResult<&str, Vec<(&str,&str)>> {
    delimited(
        multispace0,
        terminated(separated_list0(pair_separator, edge), opt(pair_separator)),
        multispace0
    )(s)
}

/// line number (starting at 1) of the position `rest` in `content`
fn line_of(content:&str, rest:&str) -> usize {
    let consumed = content.len() - rest.len();
    content[..consumed].matches('\n').count() + 1
}

/** parses an edge list into (label, label) pairs, in the order they are written */
pub fn parse_edge_list(content:&str) -> Result<Vec<(String,String)>, InputError> {
    let content = content.replace("\r", "");
    let (rest, pairs) = edges(&content)
        .map_err(|_| InputError::parse(1, "unable to read the edge list"))?;
    if !rest.is_empty() {
        let unexpected:String = rest.chars().take(16).collect();
        return Err(InputError::parse(line_of(&content, rest), format!("unexpected '{}'", unexpected)));
    }
    Ok(pairs.into_iter().map(|(a,b)| (a.to_string(), b.to_string())).collect())
}

/// builds a graph from an edge list
pub fn graph_from_edge_list(content:&str) -> Result<Graph<String>, InputError> {
    Ok(Graph::from_edges(parse_edge_list(content)?))
}

/// reads an edge list file
pub fn read_from_file<P:AsRef<Path>>(filename:P) -> Result<Graph<String>, InputError> {
    let content = fs::read_to_string(filename.as_ref())?;
    graph_from_edge_list(&content)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(v:&[(&str,&str)]) -> Vec<(String,String)> {
        v.iter().map(|(a,b)| (a.to_string(), b.to_string())).collect()
    }

    #[test]
    fn test_separators() {
        assert_eq!(parse_edge_list("1-2,2-3").unwrap(), pairs(&[("1","2"),("2","3")]));
        assert_eq!(parse_edge_list(" 1 - 2 ; 2 3 ,\n3-a_1\n").unwrap(),
            pairs(&[("1","2"),("2","3"),("3","a_1")]));
        assert_eq!(parse_edge_list("x y\r\ny z\r\n").unwrap(), pairs(&[("x","y"),("y","z")]));
    }

    #[test]
    fn test_empty() {
        assert!(parse_edge_list("").unwrap().is_empty());
        assert!(parse_edge_list("  \n ").unwrap().is_empty());
        assert!(graph_from_edge_list("").unwrap().is_empty());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse_edge_list("1-2, 3"), Err(InputError::Parse { line:1, .. })));
        assert!(matches!(parse_edge_list("1-2\n2-3\n3+4"), Err(InputError::Parse { line:3, .. })));
    }

    #[test]
    fn test_read_files() {
        let paw = read_from_file("insts/brooks/paw.edges").unwrap();
        assert_eq!(paw.nb_vertices(), 4);
        assert_eq!(paw.max_degree(), Some(3));
        let petersen = read_from_file("insts/brooks/petersen.edges").unwrap();
        assert_eq!(petersen.nb_vertices(), 10);
        assert_eq!(petersen.nb_edges(), 15);
        assert!(petersen.vertices().all(|u| petersen.degree(u) == 3));
    }
}
