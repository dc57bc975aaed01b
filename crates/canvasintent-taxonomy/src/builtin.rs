//! Built-in canvas taxonomy.
//!
//! Term lists are ordered by preference: the first term of a locale is used
//! as the display name in clarification prompts.

use serde_json::json;

use crate::locale::{Locale as L, TermTable};
use crate::types::{
    Category, ConceptNode, ModifierCategory, ModifierNode, ParamTransform, ParameterExtractor,
    PatchValue,
};

/// Concept ids offered when nothing matched.
pub const FALLBACK_SUGGESTIONS: &[&str] =
    &["create_circle", "create_rect", "create_text", "move", "rotate"];

const HEX: &str = r"(#[0-9a-fA-F]{6}\b|#[0-9a-fA-F]{3}\b)";

fn fill_extractor() -> ParameterExtractor {
    ParameterExtractor::new("fill")
        .with_patterns(
            TermTable::new()
                .with(L::En, &[format!(r"(?i)(?:colou?r|fill)\s*(?:of|to|=|:)?\s*{HEX}").as_str()])
                .with(L::Es, &[format!(r"(?i)(?:color|relleno)\s*(?:de)?\s*{HEX}").as_str()])
                .with(L::Fr, &[format!(r"(?i)(?:couleur|remplissage)\s*(?:de)?\s*{HEX}").as_str()])
                .with(L::De, &[format!(r"(?i)(?:farbe|füllung)\s*{HEX}").as_str()]),
        )
        .with_transform(ParamTransform::HexColor)
}

fn radius_extractor() -> ParameterExtractor {
    ParameterExtractor::new("radius")
        .with_patterns(
            TermTable::new()
                .with(L::En, &[r"(?i)radius\s*(?:of|=|:)?\s*(\d+(?:\.\d+)?)"])
                .with(L::Es, &[r"(?i)radio\s*(?:de)?\s*(\d+(?:[.,]\d+)?)"])
                .with(L::Fr, &[r"(?i)rayon\s*(?:de)?\s*(\d+(?:[.,]\d+)?)"])
                .with(L::De, &[r"(?i)radius\s*(?:von)?\s*(\d+(?:[.,]\d+)?)"])
                .with(L::It, &[r"(?i)raggio\s*(?:di)?\s*(\d+(?:[.,]\d+)?)"])
                .with(L::Pt, &[r"(?i)raio\s*(?:de)?\s*(\d+(?:[.,]\d+)?)"]),
        )
        .with_transform(ParamTransform::Number)
}

fn axis_extractor() -> ParameterExtractor {
    ParameterExtractor::new("axis")
        .with_patterns(
            TermTable::new()
                .with(L::En, &[r"(?i)\b(horizontal|vertical)(?:ly)?\b"])
                .with(L::Es, &[r"(?i)\b(horizontal|vertical)(?:mente)?\b"])
                .with(L::De, &[r"(?i)\b(horizontal|vertikal)\b"]),
        )
        .with_transform(ParamTransform::Lowercase)
}

/// All built-in concepts, in registry order.
pub fn concepts() -> Vec<ConceptNode> {
    let mut concepts = Vec::with_capacity(40);
    concepts.extend(item_concepts());
    concepts.extend(motion_concepts());
    concepts.extend(transformation_concepts());
    concepts.extend(timing_concepts());
    concepts.extend(background_concepts());
    concepts.extend(effect_concepts());
    concepts.extend(relation_concepts());
    concepts.extend(query_concepts());
    concepts.extend(export_concepts());
    concepts.extend(browser_concepts());
    concepts
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

fn item_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("create_circle", Category::Item, "create_circle")
            .with_priority(6)
            .with_defaults(json!({ "radius": 50, "fill": "#3498db" }))
            .with_extractor(radius_extractor())
            .with_extractor(fill_extractor())
            .with_terms(
                TermTable::new()
                    .with(L::En, &["circle", "draw a circle", "round shape", "add a circle", "dot"])
                    .with(L::Es, &["círculo", "dibuja un círculo", "crea un círculo"])
                    .with(L::Fr, &["cercle", "dessine un cercle"])
                    .with(L::De, &["kreis", "zeichne einen kreis"])
                    .with(L::It, &["cerchio", "disegna un cerchio"])
                    .with(L::Pt, &["círculo", "desenhe um círculo"])
                    .with(L::Nl, &["cirkel", "teken een cirkel"])
                    .with(L::Ru, &["круг", "нарисуй круг"])
                    .with(L::Uk, &["коло", "намалюй коло"])
                    .with(L::Pl, &["koło", "narysuj koło"])
                    .with(L::Tr, &["daire", "çember"])
                    .with(L::ZhCn, &["圆形", "画一个圆"])
                    .with(L::ZhTw, &["圓形", "畫一個圓"])
                    .with(L::Ja, &["円", "円を描く"])
                    .with(L::Ko, &["원", "원을 그려"])
                    .with(L::Th, &["วงกลม"])
                    .with(L::Ar, &["دائرة"])
                    .with(L::He, &["עיגול"])
                    .with(L::Fa, &["دایره"])
                    .with(L::Hi, &["वृत्त", "गोला"]),
            ),
        ConceptNode::new("create_rect", Category::Item, "create_rect")
            .with_priority(6)
            .with_defaults(json!({ "width": 200, "height": 120, "fill": "#2ecc71" }))
            .with_extractor(
                ParameterExtractor::new("width")
                    .with_patterns(TermTable::new().with(
                        L::En,
                        &[r"(?i)width\s*(?:of|=|:)?\s*(\d+)", r"(?i)(\d+)\s*(?:px\s*)?wide"],
                    ))
                    .with_transform(ParamTransform::Number),
            )
            .with_extractor(
                ParameterExtractor::new("height")
                    .with_patterns(TermTable::new().with(
                        L::En,
                        &[r"(?i)height\s*(?:of|=|:)?\s*(\d+)", r"(?i)(\d+)\s*(?:px\s*)?(?:tall|high)"],
                    ))
                    .with_transform(ParamTransform::Number),
            )
            .with_extractor(fill_extractor())
            .with_terms(
                TermTable::new()
                    .with(L::En, &["rectangle", "square", "box", "draw a rectangle", "rect"])
                    .with(L::Es, &["rectángulo", "cuadrado"])
                    .with(L::Fr, &["rectangle", "carré"])
                    .with(L::De, &["rechteck", "quadrat"])
                    .with(L::It, &["rettangolo", "quadrato"])
                    .with(L::Pt, &["retângulo", "quadrado"])
                    .with(L::Nl, &["rechthoek", "vierkant"])
                    .with(L::Ru, &["прямоугольник", "квадрат"])
                    .with(L::ZhCn, &["矩形", "方块"])
                    .with(L::ZhTw, &["矩形", "方塊"])
                    .with(L::Ja, &["四角形", "長方形"])
                    .with(L::Ko, &["사각형", "네모"]),
            ),
        ConceptNode::new("create_text", Category::Item, "create_text")
            .with_priority(6)
            .with_defaults(json!({ "text": "Text", "fontSize": 48, "fill": "#ffffff" }))
            .with_extractor(
                ParameterExtractor::new("fontSize")
                    .with_patterns(TermTable::new().with(
                        L::En,
                        &[r"(?i)font\s*size\s*(?:of|=|:)?\s*(\d+)", r"(?i)size\s*(\d+)\s*(?:pt|px)?"],
                    ))
                    .with_transform(ParamTransform::Integer),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["text", "write text", "label", "title", "caption", "write"])
                    .with(L::Es, &["texto", "escribe"])
                    .with(L::Fr, &["texte", "écris"])
                    .with(L::De, &["text", "schreibe"])
                    .with(L::It, &["testo", "scrivi"])
                    .with(L::Pt, &["texto", "escreva"])
                    .with(L::Nl, &["tekst", "schrijf"])
                    .with(L::Ru, &["текст", "напиши"])
                    .with(L::ZhCn, &["文字", "文本"])
                    .with(L::ZhTw, &["文字", "文本"])
                    .with(L::Ja, &["テキスト", "文字"])
                    .with(L::Ko, &["텍스트", "글자"]),
            ),
        ConceptNode::new("create_line", Category::Item, "create_line")
            .with_priority(5)
            .with_defaults(json!({ "strokeWidth": 4, "stroke": "#ffffff" }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["line", "draw a line", "stroke"])
                    .with(L::Es, &["línea", "dibuja una línea"])
                    .with(L::Fr, &["ligne", "trace une ligne"])
                    .with(L::De, &["linie", "zeichne eine linie"])
                    .with(L::It, &["linea"])
                    .with(L::Pt, &["linha"])
                    .with(L::Ru, &["линия"])
                    .with(L::ZhCn, &["线条", "直线"])
                    .with(L::ZhTw, &["線條", "直線"])
                    .with(L::Ja, &["線", "直線"])
                    .with(L::Ko, &["선", "직선"]),
            ),
        ConceptNode::new("create_star", Category::Item, "create_star")
            .with_priority(5)
            .with_defaults(json!({
                "points": 5,
                "innerRadius": 25,
                "outerRadius": 50,
                "fill": "#f1c40f"
            }))
            .with_extractor(
                ParameterExtractor::new("points")
                    .with_patterns(
                        TermTable::new().with(L::En, &[r"(?i)(\d+)[- ]?(?:points?|pointed)"]),
                    )
                    .with_transform(ParamTransform::Integer),
            )
            .with_extractor(fill_extractor())
            .with_terms(
                TermTable::new()
                    .with(L::En, &["star", "draw a star"])
                    .with(L::Es, &["estrella"])
                    .with(L::Fr, &["étoile"])
                    .with(L::De, &["stern"])
                    .with(L::It, &["stella"])
                    .with(L::Pt, &["estrela"])
                    .with(L::Nl, &["ster"])
                    .with(L::Ru, &["звезда", "звезду"])
                    .with(L::ZhCn, &["星形", "星星"])
                    .with(L::ZhTw, &["星形", "星星"])
                    .with(L::Ja, &["星", "スター"])
                    .with(L::Ko, &["별"]),
            ),
        ConceptNode::new("delete_item", Category::Item, "delete_item")
            .with_priority(9)
            .with_terms(
                TermTable::new()
                    .with(L::En, &["delete", "remove", "erase", "get rid of"])
                    .with(L::Es, &["elimina", "borra", "eliminar"])
                    .with(L::Fr, &["supprime", "efface", "supprimer"])
                    .with(L::De, &["lösche", "entferne", "löschen"])
                    .with(L::It, &["elimina", "cancella", "rimuovi"])
                    .with(L::Pt, &["apague", "remova", "excluir"])
                    .with(L::Nl, &["verwijder", "wis"])
                    .with(L::Ru, &["удали", "сотри"])
                    .with(L::Uk, &["видали"])
                    .with(L::ZhCn, &["删除", "移除"])
                    .with(L::ZhTw, &["刪除", "移除"])
                    .with(L::Ja, &["削除", "消して"])
                    .with(L::Ko, &["삭제", "지워"]),
            ),
        ConceptNode::new("duplicate_item", Category::Item, "duplicate_item")
            .with_priority(8)
            .with_defaults(json!({ "count": 1, "offset": 20 }))
            .with_extractor(
                ParameterExtractor::new("count")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)(\d+)\s*cop(?:y|ies)"]))
                    .with_transform(ParamTransform::Integer),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["duplicate", "copy", "clone", "make a copy"])
                    .with(L::Es, &["duplica", "copia"])
                    .with(L::Fr, &["duplique", "copie"])
                    .with(L::De, &["dupliziere", "kopiere"])
                    .with(L::It, &["duplica", "copia"])
                    .with(L::Pt, &["duplique", "copie"])
                    .with(L::Ru, &["дублируй", "скопируй"])
                    .with(L::ZhCn, &["复制"])
                    .with(L::ZhTw, &["複製"])
                    .with(L::Ja, &["複製", "コピー"])
                    .with(L::Ko, &["복제", "복사"]),
            ),
        ConceptNode::new("clear_canvas", Category::Item, "clear_canvas")
            .with_priority(7)
            .with_terms(
                TermTable::new()
                    .with(L::En, &["clear the canvas", "clear everything", "clear", "wipe", "reset canvas"])
                    .with(L::Es, &["limpia", "borra todo"])
                    .with(L::Fr, &["efface tout", "vide le canevas"])
                    .with(L::De, &["leere", "alles löschen"])
                    .with(L::It, &["pulisci", "cancella tutto"])
                    .with(L::Pt, &["limpe", "apague tudo"])
                    .with(L::Ru, &["очисти"])
                    .with(L::ZhCn, &["清空", "清除画布"])
                    .with(L::ZhTw, &["清空", "清除畫布"])
                    .with(L::Ja, &["クリア", "全部消して"])
                    .with(L::Ko, &["모두 지우기"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Motion
// ---------------------------------------------------------------------------

fn motion_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("rotate", Category::Motion, "animate_rotate")
            .with_priority(9)
            .with_defaults(json!({ "angle": 360, "duration": 2000 }))
            .with_extractor(
                ParameterExtractor::new("angle")
                    .with_patterns(
                        TermTable::new()
                            .with(L::En, &[r"(?i)(-?\d+(?:\.\d+)?)\s*(?:°|deg\b|degrees?\b)"])
                            .with(L::Es, &[r"(?i)(-?\d+(?:[.,]\d+)?)\s*(?:°|grados)"])
                            .with(L::Fr, &[r"(?i)(-?\d+(?:[.,]\d+)?)\s*(?:°|degrés)"])
                            .with(L::De, &[r"(?i)(-?\d+(?:[.,]\d+)?)\s*(?:°|grad)"])
                            .with(L::It, &[r"(?i)(-?\d+(?:[.,]\d+)?)\s*(?:°|gradi)"])
                            .with(L::Pt, &[r"(?i)(-?\d+(?:[.,]\d+)?)\s*(?:°|graus)"])
                            .with(L::Ru, &[r"(?i)(-?\d+)\s*(?:°|градус)"])
                            .with(L::ZhCn, &[r"(-?\d+)\s*(?:°|度)"])
                            .with(L::Ja, &[r"(-?\d+)\s*(?:°|度)"]),
                    )
                    .with_transform(ParamTransform::Number),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["rotate", "spin", "turn around", "twirl", "rotation"])
                    .with(L::Es, &["rota", "gira", "girar", "rotar"])
                    .with(L::Fr, &["tourne", "pivote", "rotation"])
                    .with(L::De, &["drehe", "rotiere", "drehen"])
                    .with(L::It, &["ruota", "gira"])
                    .with(L::Pt, &["gire", "rotacione", "girar"])
                    .with(L::Nl, &["draai", "roteer"])
                    .with(L::Ru, &["вращай", "поверни", "вращение"])
                    .with(L::Uk, &["обертай", "поверни"])
                    .with(L::Pl, &["obróć", "obracaj"])
                    .with(L::Tr, &["döndür"])
                    .with(L::ZhCn, &["旋转", "转动"])
                    .with(L::ZhTw, &["旋轉", "轉動"])
                    .with(L::Ja, &["回転", "回して"])
                    .with(L::Ko, &["회전", "돌려"])
                    .with(L::Th, &["หมุน"])
                    .with(L::Ar, &["تدوير", "دوّر"])
                    .with(L::He, &["סובב"])
                    .with(L::Fa, &["بچرخان"])
                    .with(L::Hi, &["घुमाओ"]),
            ),
        ConceptNode::new("move", Category::Motion, "animate_move")
            .with_priority(8)
            .with_defaults(json!({ "duration": 1000 }))
            .with_extractor(
                ParameterExtractor::new("x")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)\bx\s*[=:]?\s*(-?\d+(?:\.\d+)?)"]))
                    .with_transform(ParamTransform::Number),
            )
            .with_extractor(
                ParameterExtractor::new("y")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)\by\s*[=:]?\s*(-?\d+(?:\.\d+)?)"]))
                    .with_transform(ParamTransform::Number),
            )
            .with_extractor(
                ParameterExtractor::new("direction")
                    .with_patterns(
                        TermTable::new()
                            .with(L::En, &[r"(?i)\b(up|down|left|right)(?:wards?)?\b"])
                            .with(L::Es, &[r"(?i)\b(arriba|abajo|izquierda|derecha)\b"])
                            .with(L::Fr, &[r"(?i)\b(haut|bas|gauche|droite)\b"])
                            .with(L::De, &[r"(?i)\b(oben|unten|links|rechts)\b"]),
                    )
                    .with_transform(ParamTransform::Lowercase),
            )
            .with_extractor(
                ParameterExtractor::new("distance")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)\bby\s+(\d+(?:\.\d+)?)\s*(?:px|pixels?)?"]))
                    .with_transform(ParamTransform::Number),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["move", "slide", "shift", "move to", "translate"])
                    .with(L::Es, &["mueve", "desliza", "mover"])
                    .with(L::Fr, &["déplace", "glisse", "déplacer"])
                    .with(L::De, &["bewege", "verschiebe"])
                    .with(L::It, &["sposta", "muovi"])
                    .with(L::Pt, &["mova", "mover", "deslize"])
                    .with(L::Nl, &["verplaats", "beweeg"])
                    .with(L::Ru, &["перемести", "сдвинь"])
                    .with(L::Uk, &["перемісти"])
                    .with(L::Pl, &["przesuń"])
                    .with(L::ZhCn, &["移动", "平移"])
                    .with(L::ZhTw, &["移動", "平移"])
                    .with(L::Ja, &["移動", "動かして"])
                    .with(L::Ko, &["이동", "옮겨"])
                    .with(L::Th, &["ย้าย"])
                    .with(L::Ar, &["حرّك", "تحريك"])
                    .with(L::He, &["הזז"])
                    .with(L::Hi, &["खिसकाओ"]),
            ),
        ConceptNode::new("orbit", Category::Motion, "animate_orbit")
            .with_priority(9)
            .with_defaults(json!({ "radius": 150, "duration": 4000, "clockwise": true }))
            .with_extractor(radius_extractor())
            .with_extractor(
                ParameterExtractor::new("target")
                    .with_patterns(TermTable::new().with(
                        L::En,
                        &[r"(?i)around\s+(?:the\s+)?([a-z][a-z0-9_]*)"],
                    ))
                    .with_transform(ParamTransform::Trim),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["orbit", "revolve", "orbit around", "go around", "revolve around"])
                    .with(L::Es, &["órbita", "orbita", "gira alrededor"])
                    .with(L::Fr, &["orbite", "tourne autour"])
                    .with(L::De, &["umkreise", "kreise um"])
                    .with(L::It, &["orbita", "gira intorno"])
                    .with(L::Pt, &["órbita", "orbite", "gire em torno"])
                    .with(L::Nl, &["omloop", "draai rond"])
                    .with(L::Ru, &["орбита", "вращайся вокруг"])
                    .with(L::ZhCn, &["环绕", "绕轨道"])
                    .with(L::ZhTw, &["環繞", "繞軌道"])
                    .with(L::Ja, &["周回", "軌道"])
                    .with(L::Ko, &["궤도", "공전"])
                    .with(L::Th, &["โคจร"]),
            ),
        ConceptNode::new("bounce", Category::Motion, "animate_bounce")
            .with_priority(6)
            .with_defaults(json!({ "height": 100, "duration": 800 }))
            .with_extractor(
                ParameterExtractor::new("height")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)(\d+)\s*(?:px|pixels?)?\s*high"]))
                    .with_transform(ParamTransform::Number),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["bounce", "hop", "jump", "bouncing"])
                    .with(L::Es, &["rebota", "salta"])
                    .with(L::Fr, &["rebondis", "rebondir", "saute"])
                    .with(L::De, &["hüpfe", "springe"])
                    .with(L::It, &["rimbalza", "salta"])
                    .with(L::Pt, &["quique", "pule"])
                    .with(L::Nl, &["stuiter", "spring"])
                    .with(L::Ru, &["подпрыгни", "прыгай"])
                    .with(L::ZhCn, &["弹跳", "跳跃"])
                    .with(L::ZhTw, &["彈跳", "跳躍"])
                    .with(L::Ja, &["バウンド", "跳ねる"])
                    .with(L::Ko, &["튀어", "바운스"]),
            ),
        ConceptNode::new("fade_in", Category::Motion, "animate_fade")
            .with_priority(6)
            .with_defaults(json!({ "direction": "in", "duration": 1000 }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["fade in", "appear", "fade into view"])
                    .with(L::Es, &["aparece", "aparecer"])
                    .with(L::Fr, &["apparais", "fondu entrant"])
                    .with(L::De, &["einblenden", "erscheine"])
                    .with(L::It, &["appari", "dissolvenza in entrata"])
                    .with(L::Pt, &["apareça", "aparecer"])
                    .with(L::Ru, &["появись", "появление"])
                    .with(L::ZhCn, &["淡入"])
                    .with(L::ZhTw, &["淡入"])
                    .with(L::Ja, &["フェードイン"])
                    .with(L::Ko, &["페이드 인"]),
            ),
        ConceptNode::new("fade_out", Category::Motion, "animate_fade")
            .with_priority(6)
            .with_defaults(json!({ "direction": "out", "duration": 1000 }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["fade out", "disappear", "vanish", "fade away"])
                    .with(L::Es, &["desaparece", "desvanece"])
                    .with(L::Fr, &["disparais", "fondu sortant"])
                    .with(L::De, &["ausblenden", "verschwinde"])
                    .with(L::It, &["scompari", "dissolvenza in uscita"])
                    .with(L::Pt, &["desapareça", "desaparecer"])
                    .with(L::Ru, &["исчезни", "исчезновение"])
                    .with(L::ZhCn, &["淡出", "消失"])
                    .with(L::ZhTw, &["淡出", "消失"])
                    .with(L::Ja, &["フェードアウト", "消える"])
                    .with(L::Ko, &["페이드 아웃", "사라져"]),
            ),
        ConceptNode::new("pulse", Category::Motion, "animate_pulse")
            .with_priority(5)
            .with_defaults(json!({ "scale": 1.2, "duration": 600 }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["pulse", "throb", "heartbeat", "breathe"])
                    .with(L::Es, &["pulsa", "latido"])
                    .with(L::Fr, &["pulsation", "palpite"])
                    .with(L::De, &["pulsiere", "herzschlag"])
                    .with(L::It, &["pulsa", "battito"])
                    .with(L::Pt, &["pulse", "pulsar"])
                    .with(L::Ru, &["пульсируй"])
                    .with(L::ZhCn, &["脉动", "脉冲"])
                    .with(L::ZhTw, &["脈動", "脈衝"])
                    .with(L::Ja, &["脈動", "パルス"])
                    .with(L::Ko, &["맥동"]),
            ),
        ConceptNode::new("shake", Category::Motion, "animate_shake")
            .with_priority(5)
            .with_defaults(json!({ "intensity": 10, "duration": 500 }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["shake", "wobble", "jiggle", "vibrate"])
                    .with(L::Es, &["sacude", "agita"])
                    .with(L::Fr, &["secoue", "tremble"])
                    .with(L::De, &["schüttle", "wackle"])
                    .with(L::It, &["scuoti", "trema"])
                    .with(L::Pt, &["sacuda", "balance"])
                    .with(L::Ru, &["потряси", "трясись"])
                    .with(L::ZhCn, &["摇晃", "抖动"])
                    .with(L::ZhTw, &["搖晃", "抖動"])
                    .with(L::Ja, &["揺らす", "シェイク"])
                    .with(L::Ko, &["흔들어"]),
            ),
        ConceptNode::new("follow_path", Category::Motion, "animate_path")
            .with_priority(5)
            .with_defaults(json!({ "path": "wave", "duration": 3000 }))
            .with_extractor(
                ParameterExtractor::new("path")
                    .with_patterns(TermTable::new().with(
                        L::En,
                        &[r"(?i)\b(wave|zigzag|spiral|figure[- ]eight)\b"],
                    ))
                    .with_transform(ParamTransform::Lowercase),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["along a path", "motion path", "path", "zigzag", "spiral"])
                    .with(L::Es, &["trayectoria", "zigzag"])
                    .with(L::Fr, &["trajectoire", "zigzag"])
                    .with(L::De, &["pfad", "zickzack"])
                    .with(L::It, &["percorso", "zigzag"])
                    .with(L::Pt, &["trajetória", "ziguezague"])
                    .with(L::Ru, &["траектория", "зигзаг"])
                    .with(L::ZhCn, &["沿路径", "路径动画"])
                    .with(L::ZhTw, &["沿路徑", "路徑動畫"])
                    .with(L::Ja, &["パスに沿って"])
                    .with(L::Ko, &["경로"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Transformation
// ---------------------------------------------------------------------------

fn transformation_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("scale", Category::Transformation, "transform_scale")
            .with_priority(7)
            .with_defaults(json!({ "factor": 1.5, "duration": 500 }))
            .with_extractor(
                ParameterExtractor::new("factor")
                    .with_patterns(TermTable::new().with(
                        L::En,
                        &[r"(?i)\b(\d+(?:\.\d+)?)\s*x\b", r"(?i)\bby\s+(\d+(?:\.\d+)?)\s*times\b"],
                    ))
                    .with_transform(ParamTransform::Number),
            )
            .with_extractor(
                ParameterExtractor::new("factor")
                    .with_patterns(TermTable::new().with(L::En, &[r"(\d+(?:\.\d+)?)\s*%"]))
                    .with_transform(ParamTransform::Percentage),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["scale", "resize", "grow", "shrink", "enlarge", "make bigger", "make smaller", "zoom"])
                    .with(L::Es, &["escala", "agranda", "encoge", "redimensiona"])
                    .with(L::Fr, &["agrandis", "rétrécis", "redimensionne"])
                    .with(L::De, &["skaliere", "vergrößere", "verkleinere"])
                    .with(L::It, &["scala", "ingrandisci", "rimpicciolisci"])
                    .with(L::Pt, &["escale", "aumente", "diminua", "redimensione"])
                    .with(L::Nl, &["schaal", "vergroot", "verklein"])
                    .with(L::Ru, &["масштабируй", "увеличь", "уменьши"])
                    .with(L::ZhCn, &["缩放", "放大", "缩小"])
                    .with(L::ZhTw, &["縮放", "放大", "縮小"])
                    .with(L::Ja, &["拡大", "縮小", "スケール"])
                    .with(L::Ko, &["확대", "축소"]),
            ),
        ConceptNode::new("flip", Category::Transformation, "transform_flip")
            .with_priority(6)
            .with_defaults(json!({ "axis": "horizontal" }))
            .with_extractor(axis_extractor())
            .with_terms(
                TermTable::new()
                    .with(L::En, &["flip", "mirror", "flip horizontally", "flip vertically"])
                    .with(L::Es, &["voltea", "refleja"])
                    .with(L::Fr, &["retourne", "miroir"])
                    .with(L::De, &["spiegle", "spiegeln"])
                    .with(L::It, &["capovolgi", "specchia"])
                    .with(L::Pt, &["inverta", "espelhe"])
                    .with(L::Ru, &["отрази", "переверни"])
                    .with(L::ZhCn, &["翻转", "镜像"])
                    .with(L::ZhTw, &["翻轉", "鏡像"])
                    .with(L::Ja, &["反転"])
                    .with(L::Ko, &["뒤집어"]),
            ),
        ConceptNode::new("skew", Category::Transformation, "transform_skew")
            .with_priority(5)
            .with_defaults(json!({ "angleX": 15, "angleY": 0 }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["skew", "slant", "shear", "tilt"])
                    .with(L::Es, &["inclina", "sesga"])
                    .with(L::Fr, &["incline", "cisaille"])
                    .with(L::De, &["neige", "schräg stellen"])
                    .with(L::It, &["inclina"])
                    .with(L::Ru, &["наклони"])
                    .with(L::ZhCn, &["倾斜"])
                    .with(L::ZhTw, &["傾斜"])
                    .with(L::Ja, &["傾ける"])
                    .with(L::Ko, &["기울여"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

fn timing_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("stagger", Category::Timing, "timing_stagger")
            .with_priority(4)
            .with_defaults(json!({ "interval": 100 }))
            .with_extractor(
                ParameterExtractor::new("interval")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)(\d+)\s*ms\b"]))
                    .with_transform(ParamTransform::Integer),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["stagger", "one after another", "one by one", "cascade"])
                    .with(L::Es, &["escalonado", "uno tras otro"])
                    .with(L::Fr, &["décalé", "l'un après l'autre"])
                    .with(L::De, &["gestaffelt", "nacheinander"])
                    .with(L::It, &["sfalsato", "uno dopo l'altro"])
                    .with(L::Pt, &["escalonado", "um após o outro"])
                    .with(L::Ru, &["поочерёдно", "по очереди"])
                    .with(L::ZhCn, &["依次", "逐个"])
                    .with(L::ZhTw, &["依次", "逐個"])
                    .with(L::Ja, &["順番に"])
                    .with(L::Ko, &["차례로"]),
            ),
        ConceptNode::new("sequence", Category::Timing, "timing_sequence")
            .with_priority(3)
            .with_terms(
                TermTable::new()
                    .with(L::En, &["sequence", "timeline", "chain animations", "animation sequence"])
                    .with(L::Es, &["secuencia", "encadenar animaciones"])
                    .with(L::Fr, &["séquence", "enchaîner les animations"])
                    .with(L::De, &["sequenz", "animationen verketten"])
                    .with(L::It, &["sequenza", "concatena animazioni"])
                    .with(L::Pt, &["sequência", "encadear animações"])
                    .with(L::Ru, &["последовательность", "цепочка анимаций"])
                    .with(L::ZhCn, &["序列", "动画序列"])
                    .with(L::ZhTw, &["序列", "動畫序列"])
                    .with(L::Ja, &["シーケンス", "連続アニメーション"])
                    .with(L::Ko, &["순서대로"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Background
// ---------------------------------------------------------------------------

fn background_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("set_background", Category::Background, "set_background")
            .with_priority(8)
            .with_defaults(json!({ "fill": "#000000" }))
            .with_extractor(fill_extractor())
            .with_terms(
                TermTable::new()
                    .with(L::En, &["background", "background color", "backdrop", "set background"])
                    .with(L::Es, &["fondo", "color de fondo"])
                    .with(L::Fr, &["arrière-plan", "fond", "couleur de fond"])
                    .with(L::De, &["hintergrund", "hintergrundfarbe"])
                    .with(L::It, &["sfondo"])
                    .with(L::Pt, &["fundo", "cor de fundo"])
                    .with(L::Nl, &["achtergrond"])
                    .with(L::Ru, &["фон"])
                    .with(L::Uk, &["тло"])
                    .with(L::ZhCn, &["背景", "背景颜色"])
                    .with(L::ZhTw, &["背景", "背景顏色"])
                    .with(L::Ja, &["背景"])
                    .with(L::Ko, &["배경"])
                    .with(L::Th, &["พื้นหลัง"])
                    .with(L::Ar, &["خلفية"])
                    .with(L::He, &["רקע"]),
            ),
        ConceptNode::new("background_gradient", Category::Background, "set_background_gradient")
            .with_priority(7)
            .with_defaults(json!({ "from": "#000000", "to": "#ffffff", "angle": 90 }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["gradient", "color gradient", "gradient fill"])
                    .with(L::Es, &["degradado"])
                    .with(L::Fr, &["dégradé"])
                    .with(L::De, &["farbverlauf", "verlauf"])
                    .with(L::It, &["gradiente", "sfumatura"])
                    .with(L::Pt, &["gradiente", "degradê"])
                    .with(L::Ru, &["градиент"])
                    .with(L::ZhCn, &["渐变"])
                    .with(L::ZhTw, &["漸層"])
                    .with(L::Ja, &["グラデーション"])
                    .with(L::Ko, &["그라데이션"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

fn effect_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("glow", Category::Effect, "apply_effect")
            .with_priority(5)
            .with_defaults(json!({ "effect": "glow", "intensity": 0.8 }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["glow", "neon", "shine", "halo"])
                    .with(L::Es, &["brillo", "resplandor"])
                    .with(L::Fr, &["lueur", "brille"])
                    .with(L::De, &["leuchten", "glühen"])
                    .with(L::It, &["bagliore", "brilla"])
                    .with(L::Pt, &["brilho", "brilhar"])
                    .with(L::Ru, &["свечение"])
                    .with(L::ZhCn, &["发光", "光晕"])
                    .with(L::ZhTw, &["發光", "光暈"])
                    .with(L::Ja, &["グロー", "光らせて"])
                    .with(L::Ko, &["빛나게"]),
            ),
        ConceptNode::new("blur", Category::Effect, "apply_effect")
            .with_priority(5)
            .with_defaults(json!({ "effect": "blur", "amount": 5 }))
            .with_extractor(
                ParameterExtractor::new("amount")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)blur\s*(?:of|by)?\s*(\d+(?:\.\d+)?)"]))
                    .with_transform(ParamTransform::Number),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["blur", "blurry", "soften", "out of focus"])
                    .with(L::Es, &["desenfoca", "difumina"])
                    .with(L::Fr, &["flou", "floute"])
                    .with(L::De, &["unschärfe", "weichzeichnen"])
                    .with(L::It, &["sfoca", "sfocatura"])
                    .with(L::Pt, &["desfoque", "borrar"])
                    .with(L::Ru, &["размытие", "размой"])
                    .with(L::ZhCn, &["模糊"])
                    .with(L::ZhTw, &["模糊"])
                    .with(L::Ja, &["ぼかし"])
                    .with(L::Ko, &["흐림"]),
            ),
        ConceptNode::new("shadow", Category::Effect, "apply_effect")
            .with_priority(5)
            .with_defaults(json!({ "effect": "shadow", "blur": 10, "offsetX": 5, "offsetY": 5 }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["shadow", "drop shadow"])
                    .with(L::Es, &["sombra"])
                    .with(L::Fr, &["ombre"])
                    .with(L::De, &["schatten"])
                    .with(L::It, &["ombra"])
                    .with(L::Pt, &["sombra"])
                    .with(L::Ru, &["тень"])
                    .with(L::ZhCn, &["阴影"])
                    .with(L::ZhTw, &["陰影"])
                    .with(L::Ja, &["影", "シャドウ"])
                    .with(L::Ko, &["그림자"]),
            ),
        ConceptNode::new("particles", Category::Effect, "apply_effect")
            .with_priority(4)
            .with_defaults(json!({ "effect": "particles", "count": 50 }))
            .with_extractor(
                ParameterExtractor::new("count")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)(\d+)\s*particles"]))
                    .with_transform(ParamTransform::Integer),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["particles", "sparkle", "confetti", "explosion"])
                    .with(L::Es, &["partículas", "chispas", "confeti"])
                    .with(L::Fr, &["particules", "étincelles", "confettis"])
                    .with(L::De, &["partikel", "funken", "konfetti"])
                    .with(L::It, &["particelle", "scintille", "coriandoli"])
                    .with(L::Pt, &["partículas", "faíscas", "confete"])
                    .with(L::Ru, &["частицы", "искры"])
                    .with(L::ZhCn, &["粒子", "火花"])
                    .with(L::ZhTw, &["粒子", "火花"])
                    .with(L::Ja, &["パーティクル", "紙吹雪"])
                    .with(L::Ko, &["파티클"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

fn relation_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("group", Category::Relation, "create_relation")
            .with_priority(5)
            .with_defaults(json!({ "type": "group" }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["group", "group together", "combine", "merge"])
                    .with(L::Es, &["agrupa", "agrupar"])
                    .with(L::Fr, &["groupe", "regroupe"])
                    .with(L::De, &["gruppiere"])
                    .with(L::It, &["raggruppa"])
                    .with(L::Pt, &["agrupe"])
                    .with(L::Ru, &["сгруппируй"])
                    .with(L::ZhCn, &["分组", "组合"])
                    .with(L::ZhTw, &["分組", "組合"])
                    .with(L::Ja, &["グループ化"])
                    .with(L::Ko, &["그룹"]),
            ),
        ConceptNode::new("attach", Category::Relation, "create_relation")
            .with_priority(5)
            .with_defaults(json!({ "type": "attach" }))
            .with_extractor(
                ParameterExtractor::new("target")
                    .with_patterns(TermTable::new().with(
                        L::En,
                        &[r"(?i)\b(?:to|onto|follows?)\s+(?:the\s+)?([a-z][a-z0-9_]*)\s*$"],
                    ))
                    .with_transform(ParamTransform::Trim),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["attach", "stick to", "follow", "bind to", "parent to"])
                    .with(L::Es, &["adjunta", "pega a", "sigue a"])
                    .with(L::Fr, &["attache", "colle à", "suis"])
                    .with(L::De, &["befestige", "hänge an", "folge"])
                    .with(L::It, &["attacca", "segui"])
                    .with(L::Pt, &["anexe", "prenda a", "siga"])
                    .with(L::Ru, &["прикрепи", "следуй за"])
                    .with(L::ZhCn, &["附加", "跟随"])
                    .with(L::ZhTw, &["附加", "跟隨"])
                    .with(L::Ja, &["くっつける", "追従"])
                    .with(L::Ko, &["부착", "따라가"]),
            ),
        ConceptNode::new("align", Category::Relation, "create_relation")
            .with_priority(5)
            .with_defaults(json!({ "type": "align", "axis": "horizontal" }))
            .with_extractor(axis_extractor())
            .with_terms(
                TermTable::new()
                    .with(L::En, &["align", "alignment", "arrange in a row", "distribute evenly"])
                    .with(L::Es, &["alinea", "alinear"])
                    .with(L::Fr, &["aligne", "aligner"])
                    .with(L::De, &["ausrichten", "richte aus"])
                    .with(L::It, &["allinea"])
                    .with(L::Pt, &["alinhe"])
                    .with(L::Ru, &["выровняй"])
                    .with(L::ZhCn, &["对齐"])
                    .with(L::ZhTw, &["對齊"])
                    .with(L::Ja, &["整列", "揃える"])
                    .with(L::Ko, &["정렬"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

fn query_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("list_items", Category::Query, "query_items")
            .with_priority(4)
            .with_terms(
                TermTable::new()
                    .with(L::En, &["list items", "show all items", "what's on the canvas", "list", "inventory"])
                    .with(L::Es, &["lista", "muestra todo"])
                    .with(L::Fr, &["liste", "affiche tout"])
                    .with(L::De, &["liste", "zeige alle"])
                    .with(L::It, &["elenca", "mostra tutto"])
                    .with(L::Pt, &["liste", "mostre tudo"])
                    .with(L::Ru, &["список", "покажи всё"])
                    .with(L::ZhCn, &["列出", "列表"])
                    .with(L::ZhTw, &["列出", "列表"])
                    .with(L::Ja, &["一覧"])
                    .with(L::Ko, &["목록"]),
            ),
        ConceptNode::new("describe_item", Category::Query, "query_item")
            .with_priority(4)
            .with_terms(
                TermTable::new()
                    .with(L::En, &["describe", "what is", "tell me about", "inspect"])
                    .with(L::Es, &["describe", "qué es"])
                    .with(L::Fr, &["décris", "qu'est-ce que"])
                    .with(L::De, &["beschreibe", "was ist"])
                    .with(L::It, &["descrivi", "cos'è"])
                    .with(L::Pt, &["descreva", "o que é"])
                    .with(L::Ru, &["опиши", "что это"])
                    .with(L::ZhCn, &["描述", "这是什么"])
                    .with(L::ZhTw, &["描述", "這是什麼"])
                    .with(L::Ja, &["説明"])
                    .with(L::Ko, &["설명"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

fn export_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("export_image", Category::Export, "export_canvas")
            .with_priority(6)
            .with_defaults(json!({ "format": "png", "scale": 1 }))
            .with_extractor(
                ParameterExtractor::new("format")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)\b(png|jpe?g|svg|webp)\b"]))
                    .with_transform(ParamTransform::Lowercase),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["export", "save as image", "export as png", "download image"])
                    .with(L::Es, &["exporta", "guardar como imagen"])
                    .with(L::Fr, &["exporte", "enregistrer en image"])
                    .with(L::De, &["exportiere", "als bild speichern"])
                    .with(L::It, &["esporta", "salva come immagine"])
                    .with(L::Pt, &["exporte", "salvar como imagem"])
                    .with(L::Ru, &["экспортируй", "сохрани как изображение"])
                    .with(L::ZhCn, &["导出", "保存图片"])
                    .with(L::ZhTw, &["匯出", "儲存圖片"])
                    .with(L::Ja, &["エクスポート", "書き出し"])
                    .with(L::Ko, &["내보내기"]),
            ),
        ConceptNode::new("export_video", Category::Export, "export_video")
            .with_priority(6)
            .with_defaults(json!({ "format": "mp4", "fps": 30, "duration": 5000 }))
            .with_extractor(
                ParameterExtractor::new("fps")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)(\d+)\s*fps\b"]))
                    .with_transform(ParamTransform::Integer),
            )
            .with_extractor(
                ParameterExtractor::new("format")
                    .with_patterns(TermTable::new().with(L::En, &[r"(?i)\b(mp4|webm|gif|mov)\b"]))
                    .with_transform(ParamTransform::Lowercase),
            )
            .with_terms(
                TermTable::new()
                    .with(L::En, &["record video", "export video", "render video", "video", "animated gif"])
                    .with(L::Es, &["grabar video", "exportar video"])
                    .with(L::Fr, &["enregistrer une vidéo", "exporter la vidéo"])
                    .with(L::De, &["video aufnehmen", "video exportieren"])
                    .with(L::It, &["registra video", "esporta video"])
                    .with(L::Pt, &["gravar vídeo", "exportar vídeo"])
                    .with(L::Ru, &["запиши видео", "экспорт видео"])
                    .with(L::ZhCn, &["录制视频", "导出视频"])
                    .with(L::ZhTw, &["錄製影片", "匯出影片"])
                    .with(L::Ja, &["動画を書き出す", "録画"])
                    .with(L::Ko, &["동영상 내보내기"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Browser
// ---------------------------------------------------------------------------

fn browser_concepts() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("take_screenshot", Category::Browser, "browser_screenshot")
            .with_priority(5)
            .with_defaults(json!({ "fullPage": false }))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["screenshot", "take a screenshot", "capture the screen", "screen capture"])
                    .with(L::Es, &["captura de pantalla"])
                    .with(L::Fr, &["capture d'écran"])
                    .with(L::De, &["bildschirmfoto", "screenshot"])
                    .with(L::It, &["cattura schermo", "screenshot"])
                    .with(L::Pt, &["captura de tela"])
                    .with(L::Ru, &["скриншот", "снимок экрана"])
                    .with(L::ZhCn, &["截图", "截屏"])
                    .with(L::ZhTw, &["截圖", "螢幕擷取"])
                    .with(L::Ja, &["スクリーンショット"])
                    .with(L::Ko, &["스크린샷"]),
            ),
        ConceptNode::new("reload_page", Category::Browser, "browser_reload")
            .with_priority(4)
            .with_terms(
                TermTable::new()
                    .with(L::En, &["reload", "refresh the page", "reload page", "start over"])
                    .with(L::Es, &["recarga", "recargar"])
                    .with(L::Fr, &["recharge", "actualise"])
                    .with(L::De, &["neu laden", "aktualisiere"])
                    .with(L::It, &["ricarica"])
                    .with(L::Pt, &["recarregue", "atualize"])
                    .with(L::Ru, &["перезагрузи", "обнови"])
                    .with(L::ZhCn, &["刷新", "重新加载"])
                    .with(L::ZhTw, &["重新整理", "重新載入"])
                    .with(L::Ja, &["再読み込み", "リロード"])
                    .with(L::Ko, &["새로고침"]),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// All built-in modifiers, in detection order.
pub fn modifiers() -> Vec<ModifierNode> {
    vec![
        ModifierNode::new("duration", ModifierCategory::Timing)
            .with_patch("duration", PatchValue::captured(1000.0))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["for * seconds", "for * second", "* seconds", "* second", "* secs", "* sec"])
                    .with(L::Es, &["durante * segundos", "* segundos"])
                    .with(L::Fr, &["pendant * secondes", "* secondes"])
                    .with(L::De, &["für * sekunden", "* sekunden"])
                    .with(L::It, &["per * secondi", "* secondi"])
                    .with(L::Pt, &["por * segundos", "* segundos"])
                    .with(L::Nl, &["* seconden"])
                    .with(L::Ru, &["* секунд", "* секунды"])
                    .with(L::ZhCn, &["*秒"])
                    .with(L::ZhTw, &["*秒"])
                    .with(L::Ja, &["*秒"])
                    .with(L::Ko, &["*초"]),
            ),
        ModifierNode::new("duration_ms", ModifierCategory::Timing)
            .with_patch("duration", PatchValue::captured(1.0))
            .with_terms(TermTable::new().with(L::En, &["* milliseconds", "* ms"])),
        ModifierNode::new("delay", ModifierCategory::Timing)
            .with_patch("delay", PatchValue::captured(1000.0))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["after * seconds", "wait * seconds", "delay of * seconds", "delay *"])
                    .with(L::Es, &["después de * segundos"])
                    .with(L::Fr, &["après * secondes"])
                    .with(L::De, &["nach * sekunden"])
                    .with(L::It, &["dopo * secondi"])
                    .with(L::Pt, &["após * segundos", "depois de * segundos"])
                    .with(L::Ru, &["через * секунд"])
                    .with(L::ZhCn, &["*秒后"])
                    .with(L::ZhTw, &["*秒後"])
                    .with(L::Ja, &["*秒後"])
                    .with(L::Ko, &["*초 후"]),
            ),
        ModifierNode::new("repeat_count", ModifierCategory::Behavior)
            .with_patch("repeat", PatchValue::captured(1.0))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["* times", "repeat *"])
                    .with(L::Es, &["* veces"])
                    .with(L::Fr, &["* fois"])
                    .with(L::De, &["* mal"])
                    .with(L::It, &["* volte"])
                    .with(L::Pt, &["* vezes"])
                    .with(L::Ru, &["* раз"])
                    .with(L::ZhCn, &["*次"])
                    .with(L::ZhTw, &["*次"])
                    .with(L::Ja, &["*回"])
                    .with(L::Ko, &["*번"]),
            ),
        ModifierNode::new("loop_forever", ModifierCategory::Behavior)
            .with_patch("loop", PatchValue::fixed(true))
            .with_patch("repeat", PatchValue::fixed(-1))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["forever", "infinitely", "on loop", "in a loop", "continuously"])
                    .with(L::Es, &["para siempre", "en bucle", "infinitamente"])
                    .with(L::Fr, &["pour toujours", "en boucle", "à l'infini"])
                    .with(L::De, &["für immer", "endlos"])
                    .with(L::It, &["per sempre", "all'infinito"])
                    .with(L::Pt, &["para sempre", "em loop", "infinitamente"])
                    .with(L::Nl, &["voor altijd", "eindeloos"])
                    .with(L::Ru, &["бесконечно", "всегда"])
                    .with(L::ZhCn, &["永远", "循环", "无限"])
                    .with(L::ZhTw, &["永遠", "循環", "無限"])
                    .with(L::Ja, &["永遠に", "ループ", "繰り返し"])
                    .with(L::Ko, &["무한", "반복"]),
            ),
        ModifierNode::new("fast", ModifierCategory::Timing)
            .with_patch("speed", PatchValue::fixed(2.0))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["quickly", "fast", "rapidly"])
                    .with(L::Es, &["rápido", "rápidamente"])
                    .with(L::Fr, &["vite", "rapidement"])
                    .with(L::De, &["schnell"])
                    .with(L::It, &["veloce", "velocemente"])
                    .with(L::Pt, &["rápido", "rapidamente"])
                    .with(L::Nl, &["snel"])
                    .with(L::Ru, &["быстро"])
                    .with(L::ZhCn, &["快速"])
                    .with(L::ZhTw, &["快速"])
                    .with(L::Ja, &["速く", "素早く"])
                    .with(L::Ko, &["빠르게"]),
            ),
        ModifierNode::new("slow", ModifierCategory::Timing)
            .with_patch("speed", PatchValue::fixed(0.5))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["slowly", "slow", "gently", "leisurely"])
                    .with(L::Es, &["lento", "despacio", "lentamente"])
                    .with(L::Fr, &["lentement", "doucement"])
                    .with(L::De, &["langsam"])
                    .with(L::It, &["lentamente", "adagio"])
                    .with(L::Pt, &["devagar", "lentamente"])
                    .with(L::Nl, &["langzaam"])
                    .with(L::Ru, &["медленно"])
                    .with(L::ZhCn, &["慢慢", "缓慢"])
                    .with(L::ZhTw, &["慢慢", "緩慢"])
                    .with(L::Ja, &["ゆっくり"])
                    .with(L::Ko, &["천천히"]),
            ),
        ModifierNode::new("ease_smooth", ModifierCategory::Style)
            .with_patch("easing", PatchValue::fixed("easeInOut"))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["smoothly", "smooth", "ease in out"])
                    .with(L::Es, &["suavemente"])
                    .with(L::Fr, &["en douceur", "fluide"])
                    .with(L::De, &["sanft", "flüssig"])
                    .with(L::It, &["dolcemente", "fluido"])
                    .with(L::Pt, &["suavemente"])
                    .with(L::Ru, &["плавно"])
                    .with(L::ZhCn, &["平滑", "流畅"])
                    .with(L::ZhTw, &["平滑", "流暢"])
                    .with(L::Ja, &["滑らかに", "スムーズ"])
                    .with(L::Ko, &["부드럽게"]),
            ),
        ModifierNode::new("ease_elastic", ModifierCategory::Style)
            .with_patch("easing", PatchValue::fixed("elastic"))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["elastic", "springy", "with a spring"])
                    .with(L::Es, &["elástico"])
                    .with(L::Fr, &["élastique"])
                    .with(L::De, &["elastisch", "federnd"])
                    .with(L::It, &["elastico"])
                    .with(L::Pt, &["elástico"]),
            ),
        ModifierNode::new("yoyo", ModifierCategory::Behavior)
            .with_patch("yoyo", PatchValue::fixed(true))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["back and forth", "yoyo", "ping pong", "ping-pong"])
                    .with(L::Es, &["de ida y vuelta", "ida y vuelta"])
                    .with(L::Fr, &["aller-retour", "va-et-vient"])
                    .with(L::De, &["hin und her"])
                    .with(L::It, &["avanti e indietro"])
                    .with(L::Pt, &["vai e volta"])
                    .with(L::Ru, &["туда и обратно"])
                    .with(L::ZhCn, &["来回", "往返"])
                    .with(L::ZhTw, &["來回", "往返"])
                    .with(L::Ja, &["行ったり来たり"])
                    .with(L::Ko, &["왕복"]),
            ),
        ModifierNode::new("clockwise", ModifierCategory::Behavior)
            .with_patch("clockwise", PatchValue::fixed(true))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["clockwise"])
                    .with(L::Es, &["en sentido horario"])
                    .with(L::Fr, &["sens horaire"])
                    .with(L::De, &["im uhrzeigersinn"])
                    .with(L::It, &["in senso orario"])
                    .with(L::Pt, &["sentido horário"])
                    .with(L::ZhCn, &["顺时针"])
                    .with(L::ZhTw, &["順時針"])
                    .with(L::Ja, &["時計回り"]),
            ),
        ModifierNode::new("counterclockwise", ModifierCategory::Behavior)
            .with_patch("clockwise", PatchValue::fixed(false))
            .with_terms(
                TermTable::new()
                    .with(L::En, &["counterclockwise", "counter-clockwise", "anticlockwise", "anti-clockwise"])
                    .with(L::Es, &["sentido antihorario"])
                    .with(L::Fr, &["sens antihoraire"])
                    .with(L::De, &["gegen den uhrzeigersinn"])
                    .with(L::It, &["senso antiorario"])
                    .with(L::Pt, &["sentido anti-horário"])
                    .with(L::ZhCn, &["逆时针"])
                    .with(L::ZhTw, &["逆時針"])
                    .with(L::Ja, &["反時計回り"]),
            ),
    ]
}
