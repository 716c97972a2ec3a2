//! Bundled catalog content. Pure data, no behavior.

use std::collections::HashMap;

use crate::itinerary::LatLng;

use super::{Attraction, DestinationGuide, Restaurant};

fn sight(
    name: &str,
    description: &str,
    address: &str,
    cost: f64,
    duration: &str,
    lat: f64,
    lng: f64,
) -> Attraction {
    Attraction {
        name: name.to_owned(),
        description: description.to_owned(),
        address: address.to_owned(),
        cost,
        duration: duration.to_owned(),
        coords: LatLng { lat, lng },
    }
}

fn eatery(
    name: &str,
    cuisine: &str,
    address: &str,
    specialties: &[&str],
    avg_cost: f64,
    description: &str,
) -> Restaurant {
    Restaurant {
        name: name.to_owned(),
        cuisine: cuisine.to_owned(),
        address: address.to_owned(),
        specialties: specialties.iter().map(|s| (*s).to_owned()).collect(),
        avg_cost,
        description: description.to_owned(),
    }
}

/// All bundled destinations.
pub(super) fn builtin_destinations() -> HashMap<String, DestinationGuide> {
    let mut map = HashMap::new();
    map.insert("南京".to_owned(), nanjing());
    map.insert("武汉".to_owned(), wuhan());
    map.insert("北京".to_owned(), beijing());
    map.insert("上海".to_owned(), shanghai());
    map.insert("杭州".to_owned(), hangzhou());
    map.insert("西安".to_owned(), xian());
    map.insert("成都".to_owned(), chengdu());
    map
}

fn nanjing() -> DestinationGuide {
    DestinationGuide {
        attractions: vec![
            sight(
                "中山陵",
                "参观孙中山先生陵寝,感受民国历史",
                "玄武区石象路7号",
                0.0,
                "2.5小时",
                32.0665,
                118.8481,
            ),
            sight(
                "夫子庙",
                "游览秦淮河畔古建筑群,品尝秦淮小吃",
                "秦淮区贡院街152号",
                40.0,
                "3小时",
                32.0245,
                118.7946,
            ),
            sight(
                "玄武湖",
                "漫步江南皇家园林,欣赏湖光山色",
                "玄武区玄武巷1号",
                0.0,
                "2小时",
                32.0743,
                118.7936,
            ),
            sight(
                "总统府",
                "探访民国时期总统府,了解近代史",
                "玄武区长江路292号",
                40.0,
                "2小时",
                32.0467,
                118.7965,
            ),
            sight(
                "侵华日军南京大屠杀遇难同胞纪念馆",
                "铭记历史,缅怀同胞",
                "建邺区水西门大街418号",
                0.0,
                "1.5小时",
                32.0347,
                118.7472,
            ),
            sight(
                "鸡鸣寺",
                "登古寺赏樱花,俯瞰玄武湖",
                "玄武区鸡鸣寺路1号",
                10.0,
                "1.5小时",
                32.0694,
                118.7900,
            ),
            sight(
                "秦淮河画舫",
                "夜游秦淮河,欣赏两岸夜景",
                "秦淮区夫子庙码头",
                80.0,
                "1小时",
                32.0237,
                118.7960,
            ),
        ],
        restaurants: vec![
            eatery(
                "南京大牌档",
                "南京本帮菜",
                "新街口德基广场6楼",
                &["金陵盐水鸭", "桂花糖芋苗", "美龄粥", "鸭血粉丝汤"],
                80.0,
                "地道南京特色菜,环境古色古香",
            ),
            eatery(
                "鸭德堡",
                "盐水鸭专门店",
                "夫子庙贡院街45号",
                &["招牌盐水鸭", "烤鸭", "鸭胗"],
                60.0,
                "南京老字号,鸭肉鲜嫩入味",
            ),
            eatery(
                "老南京小吃",
                "秦淮小吃",
                "夫子庙美食街",
                &["鸭血粉丝汤", "小笼包", "锅贴", "糖芋苗"],
                40.0,
                "汇集南京各类传统小吃",
            ),
            eatery(
                "绿柳居素菜馆",
                "素菜",
                "太平南路248号",
                &["素鸡", "素鸭", "罗汉斋"],
                70.0,
                "百年素菜老店,菜品精致",
            ),
            eatery(
                "狮子楼",
                "淮扬菜",
                "湖南路狮子桥美食街",
                &["狮子头", "蟹黄汤包", "水晶肴蹄"],
                100.0,
                "传统淮扬风味,口味清淡鲜美",
            ),
            eatery(
                "金陵饭店旋转餐厅",
                "中西自助",
                "汉中路2号36楼",
                &["自助餐", "海鲜", "甜品"],
                200.0,
                "可360度观赏南京全景",
            ),
        ],
    }
}

fn wuhan() -> DestinationGuide {
    DestinationGuide {
        attractions: vec![
            sight(
                "黄鹤楼",
                "登临江南三大名楼之首,俯瞰长江美景",
                "武昌区蛇山西坡特1号",
                70.0,
                "2小时",
                30.5451,
                114.2973,
            ),
            sight(
                "东湖",
                "中国最大的城中湖,骑行环湖绿道",
                "武昌区沿湖大道16号",
                0.0,
                "3小时",
                30.5511,
                114.3756,
            ),
            sight(
                "户部巷",
                "武汉著名美食街,品尝热干面等小吃",
                "武昌区户部巷",
                0.0,
                "2小时",
                30.5510,
                114.2892,
            ),
            sight(
                "武汉长江大桥",
                "新中国第一座长江大桥,历史地标",
                "武昌区临江大道19号",
                0.0,
                "1小时",
                30.5506,
                114.2832,
            ),
            sight(
                "湖北省博物馆",
                "参观编钟等国宝级文物",
                "武昌区东湖路160号",
                0.0,
                "2.5小时",
                30.5563,
                114.3733,
            ),
            sight(
                "汉口江滩",
                "漫步长江边,欣赏江景夜景",
                "江岸区沿江大道",
                0.0,
                "1.5小时",
                30.5973,
                114.2779,
            ),
            sight(
                "武汉大学",
                "参观百年名校,春季赏樱花胜地",
                "武昌区珞珈山路16号",
                0.0,
                "2小时",
                30.5333,
                114.3667,
            ),
        ],
        restaurants: vec![
            eatery(
                "蔡林记",
                "武汉小吃",
                "户部巷",
                &["热干面", "豆皮", "糊汤粉"],
                30.0,
                "武汉热干面老字号",
            ),
            eatery(
                "老通城",
                "湖北菜",
                "江汉路步行街",
                &["三鲜豆皮", "排骨藕汤", "鱼糊粉"],
                50.0,
                "百年老店,地道武汉味道",
            ),
            eatery(
                "靓靓蒸虾",
                "湖北菜",
                "粮道街",
                &["油焖大虾", "蒸虾", "藕带"],
                100.0,
                "武汉特色小龙虾",
            ),
            eatery(
                "四季美汤包馆",
                "小吃",
                "汉口中山大道",
                &["汤包", "糊汤粉"],
                35.0,
                "武汉四大名小吃之一",
            ),
        ],
    }
}

fn beijing() -> DestinationGuide {
    DestinationGuide {
        attractions: vec![
            sight(
                "故宫",
                "探访皇家宫殿,感受紫禁城威严",
                "东城区景山前街4号",
                60.0,
                "4小时",
                39.9167,
                116.3972,
            ),
            sight(
                "长城",
                "登八达岭长城,领略长城雄伟",
                "延庆区八达岭",
                40.0,
                "5小时",
                40.3593,
                116.0087,
            ),
            sight(
                "颐和园",
                "游览皇家园林,欣赏昆明湖",
                "海淀区新建宫门路19号",
                30.0,
                "3小时",
                39.9998,
                116.2755,
            ),
            sight(
                "天安门广场",
                "参观世界最大城市广场",
                "东城区东长安街",
                0.0,
                "1.5小时",
                39.9055,
                116.3976,
            ),
            sight(
                "天坛",
                "明清皇帝祭天之所",
                "东城区天坛东里甲1号",
                15.0,
                "2小时",
                39.8826,
                116.4068,
            ),
        ],
        restaurants: vec![
            eatery(
                "全聚德",
                "北京烤鸭",
                "前门大街30号",
                &["挂炉烤鸭", "鸭架汤"],
                150.0,
                "百年烤鸭老字号",
            ),
            eatery(
                "老北京炸酱面",
                "老北京小吃",
                "簋街",
                &["炸酱面", "卤煮", "豆汁儿"],
                50.0,
                "地道北京风味",
            ),
            eatery(
                "东来顺",
                "涮羊肉",
                "王府井大街",
                &["涮羊肉", "手切羊肉"],
                120.0,
                "百年涮肉老店",
            ),
        ],
    }
}

fn shanghai() -> DestinationGuide {
    DestinationGuide {
        attractions: vec![
            sight(
                "外滩",
                "漫步万国建筑博览群,欣赏浦江夜景",
                "黄浦区中山东一路",
                0.0,
                "2小时",
                31.2397,
                121.4903,
            ),
            sight(
                "东方明珠",
                "登塔俯瞰上海全景",
                "浦东新区世纪大道1号",
                180.0,
                "2小时",
                31.2397,
                121.4999,
            ),
            sight(
                "城隍庙",
                "品尝上海小吃,体验老城厢风情",
                "黄浦区方浜中路249号",
                10.0,
                "2.5小时",
                31.2269,
                121.4932,
            ),
            sight(
                "南京路步行街",
                "中华商业第一街购物",
                "黄浦区南京东路",
                0.0,
                "2小时",
                31.2354,
                121.4802,
            ),
        ],
        restaurants: vec![
            eatery(
                "小杨生煎",
                "生煎包",
                "城隍庙",
                &["鲜肉生煎", "虾仁生煎"],
                30.0,
                "上海特色小吃",
            ),
            eatery(
                "南翔馒头店",
                "小笼包",
                "城隍庙",
                &["蟹粉小笼", "鲜肉小笼"],
                40.0,
                "百年小笼包老店",
            ),
            eatery(
                "老正兴",
                "本帮菜",
                "福州路",
                &["红烧肉", "糖醋小排", "油爆虾"],
                120.0,
                "上海本帮菜代表",
            ),
        ],
    }
}

fn hangzhou() -> DestinationGuide {
    DestinationGuide {
        attractions: vec![
            sight(
                "西湖",
                "游览西湖十景,体验人间天堂",
                "西湖区龙井路1号",
                0.0,
                "4小时",
                30.2590,
                120.1319,
            ),
            sight(
                "灵隐寺",
                "参访江南名刹,祈福许愿",
                "西湖区灵隐路法云弄1号",
                45.0,
                "2小时",
                30.2419,
                120.0972,
            ),
            sight(
                "宋城",
                "大型宋文化主题公园,观看千古情演出",
                "西湖区之江路148号",
                310.0,
                "4小时",
                30.2103,
                120.0894,
            ),
        ],
        restaurants: vec![
            eatery(
                "楼外楼",
                "杭帮菜",
                "孤山路30号",
                &["西湖醋鱼", "东坡肉", "龙井虾仁"],
                150.0,
                "西湖边百年名店",
            ),
            eatery(
                "知味观",
                "杭州小吃",
                "湖滨路",
                &["猫耳朵", "小笼包", "片儿川"],
                60.0,
                "杭州老字号小吃店",
            ),
        ],
    }
}

fn xian() -> DestinationGuide {
    DestinationGuide {
        attractions: vec![
            sight(
                "兵马俑",
                "世界第八大奇迹,秦始皇陵兵马俑",
                "临潼区秦陵路",
                120.0,
                "3小时",
                34.3848,
                109.2789,
            ),
            sight(
                "大雁塔",
                "唐代古塔,欣赏音乐喷泉",
                "雁塔区雁塔路",
                50.0,
                "2小时",
                34.2203,
                108.9647,
            ),
            sight(
                "回民街",
                "品尝西安特色美食",
                "莲湖区北院门",
                0.0,
                "2.5小时",
                34.2640,
                108.9403,
            ),
            sight(
                "西安城墙",
                "骑行明代古城墙,俯瞰古城",
                "碑林区南门",
                54.0,
                "2小时",
                34.2584,
                108.9456,
            ),
        ],
        restaurants: vec![
            eatery(
                "老孙家泡馍",
                "陕西菜",
                "东大街",
                &["牛羊肉泡馍", "肉夹馍"],
                40.0,
                "西安泡馍老字号",
            ),
            eatery(
                "德发长饺子馆",
                "饺子",
                "钟楼",
                &["饺子宴", "各式饺子"],
                80.0,
                "西安饺子名店",
            ),
            eatery(
                "回民街小吃",
                "清真小吃",
                "回民街",
                &["肉夹馍", "凉皮", "羊肉串"],
                35.0,
                "汇集西安特色小吃",
            ),
        ],
    }
}

fn chengdu() -> DestinationGuide {
    DestinationGuide {
        attractions: vec![
            sight(
                "大熊猫繁育研究基地",
                "近距离观赏国宝大熊猫",
                "成华区熊猫大道1375号",
                55.0,
                "3小时",
                30.7329,
                104.1502,
            ),
            sight(
                "宽窄巷子",
                "体验成都老街文化,品茗休闲",
                "青羊区同仁路以东",
                0.0,
                "2小时",
                30.6733,
                104.0553,
            ),
            sight(
                "锦里",
                "三国文化主题商业街",
                "武侯区武侯祠大街231号",
                0.0,
                "2小时",
                30.6458,
                104.0491,
            ),
            sight(
                "武侯祠",
                "三国遗迹博物馆",
                "武侯区武侯祠大街231号",
                50.0,
                "2小时",
                30.6440,
                104.0490,
            ),
        ],
        restaurants: vec![
            eatery(
                "陈麻婆豆腐",
                "川菜",
                "西玉龙街",
                &["麻婆豆腐", "回锅肉"],
                70.0,
                "川菜老字号,麻婆豆腐发源地",
            ),
            eatery(
                "龙抄手",
                "成都小吃",
                "春熙路",
                &["龙抄手", "钟水饺", "担担面"],
                40.0,
                "成都著名小吃店",
            ),
            eatery(
                "小龙翻大江火锅",
                "火锅",
                "科华北路",
                &["九宫格火锅", "毛肚", "鸭肠"],
                100.0,
                "成都火锅代表",
            ),
        ],
    }
}
