pub mod greeting;
pub mod inbound;
pub mod notify;
pub mod ports;
pub mod telegram;

#[cfg(test)]
pub mod test_support;
