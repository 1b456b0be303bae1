mod network;

pub(crate) use network::init_network_stack;
