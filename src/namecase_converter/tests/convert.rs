use namecase_converter::{
    convert_client_case, convert_model_names, convert_response_names, convert_service_case,
    ConvertOptions, Converter, WordBoundary,
};
use namecase_core::{
    Case, Client, EnumMember, Export, Model, NameCase, Operation, OperationError,
    OperationResponse, ResponseLocation, Service,
};
use serde_json::json;

const ALL_CASES: [Case; 3] = [Case::Camel, Case::Snake, Case::Pascal];

fn pet_model() -> Model {
    let mut tag = Model::new("pet_tag", Export::Reference);
    tag.ty = "PetTag".into();

    Model::new("pet_record", Export::Generic)
        .with_link(tag)
        .with_enum_member(EnumMember::new("in_stock", "'in_stock'"))
        .with_enum_member(EnumMember::new("2Fast", "'2Fast'"))
        .with_enum(
            Model::new("pet_status", Export::Enum)
                .with_enum_member(EnumMember::new("sold-out", "'sold-out'")),
        )
        .with_property(Model::new("first_name", Export::Generic))
        .with_property(Model::new("id", Export::Generic))
        .with_property(Model::new("owner_address", Export::Interface))
}

#[test]
fn converts_every_name_in_a_model_tree() {
    let converted = convert_model_names(&pet_model(), Case::Camel);

    assert_eq!(converted.name, "petRecord");
    assert_eq!(converted.link.as_ref().unwrap().name, "petTag");
    assert_eq!(converted.link.as_ref().unwrap().ty, "PetTag");
    assert_eq!(converted.enum_members[0].name, "inStock");
    assert_eq!(converted.enum_members[0].value, json!("'in_stock'"));
    assert_eq!(converted.enum_members[1].name, "_2Fast");
    assert_eq!(converted.enums[0].name, "petStatus");
    assert_eq!(converted.enums[0].enum_members[0].name, "soldOut");
    assert_eq!(converted.properties[0].name, "firstName");
    assert_eq!(converted.properties[1].name, "id");
    assert_eq!(converted.properties[2].name, "owner_address");
}

#[test]
fn snake_and_pascal_trees() {
    let snake = convert_model_names(&pet_model(), Case::Snake);
    assert_eq!(snake.enum_members[1].name, "_2Fast");
    assert_eq!(snake.enums[0].enum_members[0].name, "sold_out");
    assert_eq!(snake.properties[1].name, "id");

    let pascal = convert_model_names(&pet_model(), Case::Pascal);
    assert_eq!(pascal.name, "PetRecord");
    assert_eq!(pascal.enum_members[0].name, "InStock");
    assert_eq!(pascal.properties[1].name, "Id");
    assert_eq!(pascal.properties[2].name, "owner_address");
    assert_eq!(pascal.enum_members[1].name, "_2Fast");
}

#[test]
fn numbers_are_separate_words() {
    let model = Model::new("address_line2", Export::Generic)
        .with_property(Model::new("street2Name", Export::Generic))
        .with_enum_member(EnumMember::new("level3", "'level3'"));

    let snake = convert_model_names(&model, Case::Snake);
    assert_eq!(snake.name, "address_line_2");
    assert_eq!(snake.properties[0].name, "street_2_name");
    assert_eq!(snake.enum_members[0].name, "level_3");

    let pascal = convert_model_names(&model, Case::Pascal);
    assert_eq!(pascal.name, "AddressLine2");
    assert_eq!(pascal.properties[0].name, "Street2Name");
}

#[test]
fn interface_names_are_never_renamed() {
    let model = Model::new("MyInterface", Export::Interface);

    for &case in ALL_CASES.iter() {
        assert_eq!(convert_model_names(&model, case).name, "MyInterface");
    }
}

#[test]
fn input_is_not_modified() {
    let model = pet_model();
    let before = model.clone();

    let _ = convert_model_names(&model, Case::Pascal);

    assert_eq!(model, before);
}

#[test]
fn absent_link_stays_absent() {
    let model = Model::new("no_link", Export::Generic);

    let converted = convert_model_names(&model, Case::Snake);
    assert!(converted.link.is_none());

    let value = serde_json::to_value(&converted).unwrap();
    assert!(value["link"].is_null());
}

#[test]
fn service_conversion_only_touches_results() {
    let mut operation = Operation::new("get_pet_by_id", "GET", "/pets/{pet_id}")
        .with_result(OperationResponse::new(
            200,
            Model::new("pet_record", Export::Reference),
        ))
        .with_result(OperationResponse {
            location: ResponseLocation::Header,
            code: 201,
            model: Model::new("location_url", Export::Generic),
        });
    operation.service = "pet_store".into();
    operation.errors.push(OperationError {
        code: 404,
        description: "pet_not_found".into(),
    });

    let service = Service::new("pet_store")
        .with_operation(operation)
        .with_operation(Operation::new("delete_pet", "DELETE", "/pets/{pet_id}"));

    let converted = convert_service_case(&service, Case::Pascal);

    assert_eq!(converted.name, "pet_store");
    assert_eq!(converted.operations.len(), 2);

    let first = &converted.operations[0];
    assert_eq!(first.name, "get_pet_by_id");
    assert_eq!(first.method, "GET");
    assert_eq!(first.path, "/pets/{pet_id}");
    assert_eq!(first.service, "pet_store");
    assert_eq!(first.errors, service.operations[0].errors);
    assert_eq!(first.results[0].model.name, "PetRecord");
    assert_eq!(first.results[1].model.name, "LocationUrl");
    assert_eq!(first.results[1].location, ResponseLocation::Header);
    assert_eq!(first.results[1].code, 201);

    assert_eq!(converted.operations[1], service.operations[1]);
}

#[test]
fn response_names_convert_like_models() {
    let response = OperationResponse::new(200, Model::new("pet_list", Export::Array));

    let converted = convert_response_names(&response, Case::Snake);

    assert_eq!(converted.model.name, "pet_list");
    assert_eq!(converted.code, 200);
    assert_eq!(
        convert_response_names(&response, Case::Camel).model.name,
        "petList"
    );
}

#[test]
fn client_conversion_respects_none() {
    let client = Client {
        version: "1.0".into(),
        server: "https://api.example.com".into(),
        models: vec![pet_model()],
        services: vec![Service::new("pets").with_operation(
            Operation::new("list_pets", "GET", "/pets").with_result(OperationResponse::new(
                200,
                Model::new("pet_page", Export::Reference),
            )),
        )],
        ..Client::default()
    };

    assert_eq!(convert_client_case(&client, NameCase::None), client);

    let converted = convert_client_case(&client, NameCase::Camel);
    assert_eq!(converted.version, "1.0");
    assert_eq!(converted.models[0].name, "petRecord");
    assert_eq!(
        converted.services[0].operations[0].results[0].model.name,
        "petPage"
    );
    assert_eq!(converted.services[0].operations[0].name, "list_pets");
}

#[test]
fn converter_options_apply_to_the_whole_tree() {
    let model = Model::new("x-request-id", Export::Generic)
        .with_enum_member(EnumMember::new("1st-place", "'1st-place'"));

    let converter = Converter::new(Case::Camel).with_options(ConvertOptions {
        boundary: WordBoundary::IgnoreHyphen,
        sanitize_enum_names: false,
    });
    let converted = converter.convert_model(&model);

    assert_eq!(converted.name, "x-request-id");
    assert_eq!(converted.enum_members[0].name, "1st-place");
}

#[test]
fn unknown_ir_keys_survive_conversion() {
    let client: Client = serde_json::from_value(json!({
        "version": "3",
        "generator": "custom",
        "models": [{
            "name": "created_at",
            "export": "generic",
            "format": "date-time",
            "maximum": 10,
            "enum": [{ "name": "first_value", "value": 1, "deprecated": true }]
        }],
        "services": [{
            "name": "pets",
            "operations": [{
                "name": "list_pets",
                "parametersPath": [],
                "parametersQuery": [{ "in": "query", "name": "page_size" }],
                "results": [{ "in": "response", "code": 200, "name": "pet_page", "pattern": "^p" }]
            }]
        }]
    }))
    .unwrap();

    for &name_case in &[NameCase::None, NameCase::Camel] {
        let value = serde_json::to_value(convert_client_case(&client, name_case)).unwrap();

        assert_eq!(value["generator"], json!("custom"));
        assert_eq!(value["models"][0]["format"], json!("date-time"));
        assert_eq!(value["models"][0]["maximum"], json!(10));
        assert_eq!(value["models"][0]["enum"][0]["deprecated"], json!(true));

        let operation = &value["services"][0]["operations"][0];
        assert_eq!(operation["parametersPath"], json!([]));
        assert_eq!(operation["parametersQuery"][0]["name"], json!("page_size"));
        assert_eq!(operation["results"][0]["pattern"], json!("^p"));
    }

    let camel = convert_client_case(&client, NameCase::Camel);
    assert_eq!(camel.models[0].name, "createdAt");
    assert_eq!(camel.services[0].operations[0].results[0].model.name, "petPage");
}

#[test]
fn reads_and_converts_ir_json() {
    let client: Client = serde_json::from_value(json!({
        "version": "2",
        "server": "",
        "models": [{
            "name": "order_item",
            "export": "interface",
            "type": "any",
            "properties": [
                { "name": "unit_price", "export": "generic", "type": "number", "isRequired": true }
            ]
        }],
        "services": []
    }))
    .unwrap();

    let converted = convert_client_case(&client, NameCase::Pascal);
    let value = serde_json::to_value(&converted).unwrap();

    assert_eq!(value["models"][0]["name"], json!("order_item"));
    assert_eq!(value["models"][0]["properties"][0]["name"], json!("UnitPrice"));
    assert_eq!(value["models"][0]["properties"][0]["isRequired"], json!(true));
}
