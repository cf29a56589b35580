/* demos/demo.rs */

use publicip::{
    IpResolver, PrivateNetworks, RawRequest, client_ip, client_public_ip, dedup,
    is_private_or_loopback_str, remote_ip,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Public Client IP Examples ===\n");

    example_1_forwarded_chain();
    example_2_x_real_ip();
    example_3_remote_addr();
    example_4_chained_fallback();
    example_5_custom_networks();
    example_6_classifier();
    example_7_dedup();

    println!("=== All examples completed! ===");
}

fn show(label: &str, ip: &str) {
    if ip.is_empty() {
        println!("{}: <unknown>", label);
    } else {
        println!("{}: {}", label, ip);
    }
}

fn example_1_forwarded_chain() {
    println!("Example 1: X-Forwarded-For with private hops");

    let req = RawRequest::new("10.0.0.2:51234")
        .with_header("X-Forwarded-For", "192.168.1.10, 203.0.113.1, 10.0.0.5");
    show("First public entry", &client_public_ip(&req));
    println!();
}

fn example_2_x_real_ip() {
    println!("Example 2: X-Real-Ip when the chain is all internal");

    let req = RawRequest::new("10.0.0.2:51234")
        .with_header("X-Forwarded-For", "10.1.1.1, 172.16.0.9")
        .with_header("X-Real-Ip", "198.51.100.42");
    show("Resolved", &client_public_ip(&req));
    println!();
}

fn example_3_remote_addr() {
    println!("Example 3: No headers, public peer");

    let req = RawRequest::new("192.0.2.123:443");
    show("Resolved", &client_public_ip(&req));
    show("Remote host", &remote_ip(&req));
    println!();
}

fn example_4_chained_fallback() {
    println!("Example 4: Everything internal");

    let req = RawRequest::new("127.0.0.1:8080").with_header("X-Real-Ip", "192.168.1.100");
    show("Public only", &client_public_ip(&req));
    show("With remote fallback", &client_ip(&req));
    println!();
}

fn example_5_custom_networks() {
    println!("Example 5: Custom private network table");

    let networks = match PrivateNetworks::from_cidrs(["10.0.0.0/8", "100.64.0.0/10"]) {
        Ok(networks) => networks,
        Err(err) => {
            println!("Invalid table: {}", err);
            return;
        }
    };
    let resolver = IpResolver::new().with_networks(networks);

    let req = RawRequest::new("10.0.0.2:51234")
        .with_header("X-Forwarded-For", "100.64.3.3, 192.168.7.7");
    show("Default table", &client_public_ip(&req));
    show("Custom table", &resolver.client_public_ip(&req));
    println!();
}

fn example_6_classifier() {
    println!("Example 6: Classifying addresses");

    for ip in ["127.0.0.1", "10.0.0.1", "172.16.0.1", "8.8.8.8", "fe80::1", "unknown"] {
        println!("  {:<12} private or loopback: {}", ip, is_private_or_loopback_str(ip));
    }
    println!();
}

fn example_7_dedup() {
    println!("Example 7: Deduplicating a list");

    let merged = dedup(["a", "b", "a", "c", "b"]);
    println!("  {:?}", merged);
    println!();
}
