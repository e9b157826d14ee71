#[cfg(all(target_arch = "x86_64", target_feature = "aes", target_feature = "avx2"))]
pub use self::gx_hash::*;

#[cfg(not(all(target_arch = "x86_64", target_feature = "aes", target_feature = "avx2")))]
pub use self::fast_hash_fallback::*;

#[cfg(all(target_arch = "x86_64", target_feature = "aes", target_feature = "avx2"))]
mod gx_hash;

#[cfg(not(all(target_arch = "x86_64", target_feature = "aes", target_feature = "avx2")))]
mod fast_hash_fallback;
