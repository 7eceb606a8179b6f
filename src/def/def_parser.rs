// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use nom::{
    bytes::complete::tag,
    character::complete::{char, i64 as integer, multispace0},
    combinator::map,
    multi::many1,
    sequence::{delimited, preceded},
    IResult, Parser,
};

use crate::boundary::Point;

/// `( x y )` with arbitrary whitespace around the tokens
fn point(input: &str) -> IResult<&str, Point> {
    map(
        delimited(
            (multispace0, char('(')),
            (preceded(multispace0, integer), preceded(multispace0, integer)),
            (multispace0, char(')')),
        ),
        |(x, y)| Point::new(x, y),
    )
    .parse(input)
}

/// `DIEAREA ( x y ) ( x y ) ... ;`
pub fn parse_die_area(input: &str) -> IResult<&str, Vec<Point>> {
    delimited(
        (multispace0, tag("DIEAREA")),
        many1(point),
        (multispace0, char(';')),
    )
    .parse(input)
}
