pub mod decode;
pub mod impl_channel;
#[cfg(test)]
pub mod impl_fake;
pub mod impl_paths;
pub mod interface;
