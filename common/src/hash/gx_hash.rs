use gxhash::{HashMap, HashSet};

pub type FastHashMap<K, V> = HashMap<K, V>;
pub type FastHashSet<T> = HashSet<T>;
