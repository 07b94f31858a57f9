use netinfo::{InterfaceAddressMap, decode_output, default_encodings, parse_ipconfig};

const ENGLISH_SAMPLE: &str = "
Windows IP Configuration

   Host Name . . . . . . . . . . . . : DESKTOP-01
   Primary Dns Suffix  . . . . . . . :

Ethernet adapter Ethernet:

   Media State . . . . . . . . . . . : Media disconnected
   Connection-specific DNS Suffix  . :

Ethernet adapter Wi-Fi:

   Connection-specific DNS Suffix  . : lan
   Description . . . . . . . . . . . : Intel(R) Wi-Fi 6 AX201 160MHz
   Physical Address. . . . . . . . . : 3C-58-C2-11-22-33
   DHCP Enabled. . . . . . . . . . . : Yes
   Link-local IPv6 Address . . . . . : fe80::9c1e:2b4a:61d3:7f10%14(Preferred)
   IPv4 Address. . . . . . . . . . . : 192.168.1.23(Preferred)
   Subnet Mask . . . . . . . . . . . : 255.255.255.0
   Lease Obtained. . . . . . . . . . : Friday, October 16, 2026 9:01:22 AM
   Default Gateway . . . . . . . . . : fe80::1%14
                                       192.168.1.1
   DHCP Server . . . . . . . . . . . : 192.168.1.1
   DNS Servers . . . . . . . . . . . : 192.168.1.1

Unknown adapter WireGuard Tunnel:

   IPv4 Address. . . . . . . . . . . : 10.8.0.2(Preferred)
   Subnet Mask . . . . . . . . . . . : 255.255.255.255

Tunnel adapter Teredo Tunneling Pseudo-Interface:

   Media State . . . . . . . . . . . : Media disconnected
";

const TRADITIONAL_CHINESE_SAMPLE: &str = "
Windows IP 設定

乙太網路卡 乙太網路:

   連線特定 DNS 尾碼 . . . . . . . . :
   連結-本機 IPv6 位址 . . . . . . . : fe80::4d2:1a0b:9e3c:5f61%7
   IPv4 位址 . . . . . . . . . . . . : 172.16.5.40
   子網路遮罩 . . . . . . . . . . . .: 255.255.0.0
   預設閘道 . . . . . . . . . . . . .: 172.16.0.1
   實體位址 . . . . . . . . . . . . .: 00-1A-2B-3C-4D-5E
";

fn addresses<'a>(map: &'a InterfaceAddressMap, name: &str) -> Vec<&'a str> {
    map.get(name)
        .map(|list| list.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn wifi_section_yields_single_ipv4() {
    let output = "Ethernet adapter Wi-Fi:\n\
                  \x20  IPv4 Address. . . . . . . . . . . : 192.168.1.23(Preferred)\n\
                  \x20  Subnet Mask . . . . . . . . . . . : 255.255.255.0\n";
    let parsed = parse_ipconfig(output);

    let mut expected = InterfaceAddressMap::new();
    expected.push_address("Ethernet adapter Wi-Fi", "192.168.1.23".to_string());
    assert_eq!(parsed, expected);
}

#[test]
fn english_sample_keeps_only_addressed_interfaces_in_order() {
    let parsed = parse_ipconfig(ENGLISH_SAMPLE);

    let names: Vec<_> = parsed.names().collect();
    assert_eq!(
        names,
        vec!["Ethernet adapter Wi-Fi", "Unknown adapter WireGuard Tunnel"]
    );
    assert_eq!(
        addresses(&parsed, "Ethernet adapter Wi-Fi"),
        vec!["fe80::9c1e:2b4a:61d3:7f10", "192.168.1.23"]
    );
    assert_eq!(
        addresses(&parsed, "Unknown adapter WireGuard Tunnel"),
        vec!["10.8.0.2"]
    );
}

#[test]
fn excluded_keys_never_contribute_addresses() {
    let parsed = parse_ipconfig(ENGLISH_SAMPLE);
    for (_, list) in parsed.iter() {
        assert!(!list.iter().any(|ip| ip == "255.255.255.0"));
        assert!(!list.iter().any(|ip| ip == "192.168.1.1"));
        assert!(!list.iter().any(|ip| ip == "fe80::1"));
    }
}

#[test]
fn traditional_chinese_sample() {
    let parsed = parse_ipconfig(TRADITIONAL_CHINESE_SAMPLE);

    let names: Vec<_> = parsed.names().collect();
    assert_eq!(names, vec!["乙太網路卡 乙太網路"]);
    assert_eq!(
        addresses(&parsed, "乙太網路卡 乙太網路"),
        vec!["fe80::4d2:1a0b:9e3c:5f61", "172.16.5.40"]
    );
}

#[test]
fn result_never_exceeds_header_count_and_has_no_empty_lists() {
    let headers = ENGLISH_SAMPLE
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace) && line.ends_with(':'))
        .count();
    let parsed = parse_ipconfig(ENGLISH_SAMPLE);

    assert!(parsed.len() <= headers);
    assert!(parsed.iter().all(|(_, list)| !list.is_empty()));
}

#[test]
fn parsing_is_idempotent() {
    assert_eq!(parse_ipconfig(ENGLISH_SAMPLE), parse_ipconfig(ENGLISH_SAMPLE));
    assert_eq!(
        parse_ipconfig(TRADITIONAL_CHINESE_SAMPLE),
        parse_ipconfig(TRADITIONAL_CHINESE_SAMPLE)
    );
}

#[test]
fn duplicate_addresses_collapse_within_interface() {
    let output = "Ethernet adapter LAN:\n\
                  \x20  IPv6 Address. . . : 2001:db8::5(Preferred)\n\
                  \x20  Temporary IPv6 Address. . . : 2001:DB8:0:0::5\n\
                  \x20  IPv4 Address. . . : [10.0.0.5], 10.0.0.5;\n";
    let parsed = parse_ipconfig(output);

    assert_eq!(
        addresses(&parsed, "Ethernet adapter LAN"),
        vec!["2001:db8::5", "10.0.0.5"]
    );
}

#[test]
fn big5_encoded_output_round_trips_through_decoder() {
    let (bytes, _, had_errors) = encoding_rs::BIG5.encode(TRADITIONAL_CHINESE_SAMPLE);
    assert!(!had_errors);

    let text = decode_output(&bytes, &default_encodings());
    let parsed = parse_ipconfig(&text);
    assert_eq!(
        addresses(&parsed, "乙太網路卡 乙太網路"),
        vec!["fe80::4d2:1a0b:9e3c:5f61", "172.16.5.40"]
    );
}
