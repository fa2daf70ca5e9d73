pub mod friend_ops;
