//! 网卡地址映射

/// 按出现顺序排列的「网卡名 → 地址列表」映射
///
/// 地址列表保持首次出现顺序且不重复。采集完成后的映射中每个网卡都至少
/// 有一个地址，空网卡由 [`InterfaceAddressMap::drop_empty`] 剔除。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceAddressMap {
    entries: Vec<(String, Vec<String>)>,
}

impl InterfaceAddressMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只包含一个网卡、一个地址的映射
    pub fn single(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            entries: vec![(name.into(), vec![address.into()])],
        }
    }

    /// 登记网卡，已存在时保持原位置不变
    pub fn register(&mut self, name: &str) {
        if self.position(name).is_none() {
            self.entries.push((name.to_string(), Vec::new()));
        }
    }

    /// 向网卡追加地址，重复地址被忽略；返回是否真正追加
    pub fn push_address(&mut self, name: &str, address: String) -> bool {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.entries.push((name.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };

        let addresses = &mut self.entries[index].1;
        if addresses.contains(&address) {
            return false;
        }
        addresses.push(address);
        true
    }

    /// 剔除没有任何地址的网卡
    pub fn drop_empty(&mut self) {
        self.entries.retain(|(_, addresses)| !addresses.is_empty());
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.position(name)
            .map(|index| self.entries[index].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, addresses)| (name.as_str(), addresses.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == name)
    }
}
