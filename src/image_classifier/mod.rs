pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod impl_unavailable;
pub mod interface;
pub mod labels;
pub mod load;
pub mod models;
pub mod tract;

#[cfg(test)]
mod test;
