//! Cross-crate scenarios. Everything runs against loopback sockets only.

#[cfg(test)]
mod classification;
#[cfg(test)]
mod resolver;
#[cfg(test)]
mod utils;
