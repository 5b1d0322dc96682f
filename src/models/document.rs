use indexmap::IndexMap;

/// 页面元素 (浏览器节点的最小模型)
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub id: Option<String>,
    pub attrs: IndexMap<String, String>,
    pub html: String,           // 内部标记
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// 页面文档: body 标记 + 元素列表 + 查询串
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub query: String,          // location.search 部分, 如 "?print=true"
    pub body: String,
    pub elements: Vec<Element>,
}

impl Document {
    /// 按 id 查找元素, 找不到返回 None (调用方按无操作处理)
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    /// 所有带指定属性的元素
    pub fn elements_with_attr(&self, name: &str) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| e.attrs.contains_key(name))
            .collect()
    }

    /// 查询串是否带指定标记 (如 print=true)
    pub fn has_query_flag(&self, flag: &str) -> bool {
        self.query.contains(flag)
    }
}
