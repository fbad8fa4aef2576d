use std::path::Path;
use std::str::FromStr;

use super::strategy::Strategy;

pub fn path(rawpath: &str) -> Result<(), String> {
    let path = Path::new(&rawpath);
    if !path.exists() {
        return Err(format!("{} doesn't exist", rawpath));
    }
    Ok(())
}

pub fn writable(rawpath: &str) -> Result<(), String> {
    let path = Path::new(&rawpath);
    if let Some(parent) = path.parent() {
        if parent.as_os_str().is_empty() || parent.exists() {
            return Ok(());
        }
    }
    Err(format!("Path {} seems to be not writable", rawpath))
}

pub fn strategy(strategy: &str) -> Result<(), String> {
    Strategy::from_str(strategy).map(|_| ())
}

pub fn numeric<T>(low: T, upper: T) -> impl Fn(&str) -> Result<(), String>
where
    T: FromStr + std::fmt::Display + std::cmp::PartialOrd + Send + 'static,
{
    move |val: &str| -> Result<(), String> {
        let number = match val.parse::<T>() {
            Ok(number) => number,
            Err(_) => return Err(format!("failed to parse {}", val)),
        };
        if number < low || number > upper {
            return Err(format!("Value {} is expected to be inside [{}, {}] range", val, low, upper));
        }
        Ok(())
    }
}
