mod test_irregular;
mod test_streaming;
mod utils;
