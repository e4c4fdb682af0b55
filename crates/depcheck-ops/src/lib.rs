pub mod ops_check;
pub mod ops_tree;
