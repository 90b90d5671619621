/// Трейт для записи, которой владеет backend
///
/// Клиент держит только временные копии: идентификатор назначает сервер,
/// а UI использует статические имена для заголовков и сообщений.
pub trait Record {
    /// Получить ID записи
    fn id(&self) -> &str;

    /// Получить отображаемое имя (подставляется в диалог удаления)
    fn display_name(&self) -> &str;

    // ============================================================================
    // Метаданные класса записи (статические данные)
    // ============================================================================

    /// Индекс записи в системе (например, "a001")
    fn record_index() -> &'static str;

    /// Имя элемента для заголовков UI (например, "Café")
    fn element_name() -> &'static str;

    /// Имя списка для UI (например, "Cafés")
    fn list_name() -> &'static str;

    /// Существительное для текстов ошибок (например, "cafe")
    fn message_noun() -> &'static str;
}
