//! URL 构建工具

/// 修复 base_url
///
/// - 移除末尾斜杠
/// - 修复双斜杠（保留协议部分）
pub fn fix_base_url(base_url: &str) -> String {
    let mut url = base_url.trim().trim_end_matches('/').to_string();

    // 修复双斜杠（跳过协议部分）
    if let Some(pos) = url.find("://") {
        let (protocol, rest) = url.split_at(pos + 3);
        let fixed_rest = rest.replace("//", "/");
        url = format!("{}{}", protocol, fixed_rest);
    }

    url
}

/// 构建 Gemini generateContent 端点
///
/// 接受以下几种 base_url：
/// - `https://generativelanguage.googleapis.com`
/// - `https://generativelanguage.googleapis.com/v1beta`
/// - 已经是完整的 `...:generateContent` 地址
pub fn build_gemini_endpoint(base_url: &str, model: &str) -> String {
    let url = fix_base_url(base_url);

    if url.ends_with(":generateContent") {
        url
    } else if url.ends_with("/v1beta") || url.ends_with("/v1") {
        format!("{}/models/{}:generateContent", url, model)
    } else {
        format!("{}/v1beta/models/{}:generateContent", url, model)
    }
}

/// 构建 Gemini 模型信息端点
///
/// 与 [`build_gemini_endpoint`] 接受同样的 base_url，完整的 `:generateContent`
/// 地址会去掉方法后缀
pub fn build_gemini_model_endpoint(base_url: &str, model: &str) -> String {
    let url = fix_base_url(base_url);

    if let Some(model_url) = url.strip_suffix(":generateContent") {
        model_url.to_string()
    } else if url.ends_with("/v1beta") || url.ends_with("/v1") {
        format!("{}/models/{}", url, model)
    } else {
        format!("{}/v1beta/models/{}", url, model)
    }
}

/// API 密钥脱敏，仅保留前 4 位
pub fn mask_api_key(api_key: &str) -> String {
    let prefix: String = api_key.chars().take(4).collect();
    format!("{}****", prefix)
}
