use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    Sequential,
    PerFile,
    Pool,
    Stream,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(strategy: &str) -> Result<Self, Self::Err> {
        match strategy {
            "seq" | "sequential" => Ok(Strategy::Sequential),
            "perfile" | "per-file" => Ok(Strategy::PerFile),
            "pool" => Ok(Strategy::Pool),
            "stream" => Ok(Strategy::Stream),
            _ => Err(format!("Unknown strategy {}, expected one of seq/perfile/pool/stream", strategy)),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Strategy::Sequential => "seq",
            Strategy::PerFile => "perfile",
            Strategy::Pool => "pool",
            Strategy::Stream => "stream",
        };
        write!(f, "{}", symbol)
    }
}
