//! 网格位置
//!
//! 二维网格坐标与曼哈顿距离。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 网格位置：(行, 列)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: i64,
    pub column: i64,
}

impl Location {
    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }
}

/// 两点之间的曼哈顿距离，超出 u64 时饱和
pub fn manhattan_distance(a: Location, b: Location) -> u64 {
    a.row
        .abs_diff(b.row)
        .saturating_add(a.column.abs_diff(b.column))
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

impl FromStr for Location {
    type Err = String;

    /// 解析 `row,col`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<i64>()
                .map_err(|e| format!("bad coordinate `{v}` in `{s}`: {e}"))
        };
        Ok(Location::new(parse(row)?, parse(column)?))
    }
}
